use std::path::Path;

use serde::Serialize;

use super::config::Config;
use super::signal::StopSignal;
use super::system_monitor::{
    evaluate_alerts, AlertSet, MetricsProvider, Snapshot, SnapshotBuilder, SystemIdentity,
};
use crate::error::Result;

/// One refresh cycle: the snapshot and the alerts it raised
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub snapshot: Snapshot,
    pub alerts: AlertSet,
}

/// Everything a command needs, built once in `main` and passed down
pub struct Monitor {
    config: Config,
    identity: SystemIdentity,
    provider: Box<dyn MetricsProvider>,
    builder: SnapshotBuilder,
}

impl Monitor {
    /// Resolve the host identity and assemble the context
    pub fn new(
        config: Config,
        mut provider: Box<dyn MetricsProvider>,
        builder: SnapshotBuilder,
        os_release: &Path,
    ) -> Self {
        let identity = SystemIdentity::resolve(provider.as_mut(), os_release);

        Self {
            config,
            identity,
            provider,
            builder,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn identity(&self) -> &SystemIdentity {
        &self.identity
    }

    /// Signal observed by snapshot sampling; the dashboard also sleeps on it
    pub fn stop_signal(&self) -> &StopSignal {
        self.builder.stop_signal()
    }

    /// Build a fresh snapshot and evaluate it against the configured thresholds
    pub fn report(&mut self, process_limit: usize) -> Result<Report> {
        let snapshot = self.builder.build(self.provider.as_mut(), process_limit)?;
        let alerts = evaluate_alerts(&snapshot, &self.config.alerts);

        Ok(Report { snapshot, alerts })
    }
}
