use std::time::Duration;

use chrono::Utc;
use log::debug;

use crate::core::signal::StopSignal;
use crate::error::Result;

use super::metrics::*;
use super::provider::MetricsProvider;

/// CPU sampling window; never shorter than one second so usage is not a
/// degenerate 0% / 100% instantaneous reading
pub fn default_sample_interval() -> Duration {
    sysinfo::MINIMUM_CPU_UPDATE_INTERVAL.max(Duration::from_secs(1))
}

/// Assembles one [`Snapshot`] per call from a [`MetricsProvider`]
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    sample_interval: Duration,
    stop: StopSignal,
}

impl SnapshotBuilder {
    pub fn new(stop: StopSignal) -> Self {
        Self {
            sample_interval: default_sample_interval(),
            stop,
        }
    }

    pub fn with_sample_interval(mut self, sample_interval: Duration) -> Self {
        self.sample_interval = sample_interval;
        self
    }

    pub fn stop_signal(&self) -> &StopSignal {
        &self.stop
    }

    /// Build a snapshot, keeping at most `process_limit` processes.
    ///
    /// Unreadable mounts and processes are dropped. Only provider-level failures
    /// and a Ctrl+C during the CPU sampling window are returned as errors.
    pub fn build(
        &self,
        provider: &mut dyn MetricsProvider,
        process_limit: usize,
    ) -> Result<Snapshot> {
        provider.prime()?;
        self.stop.sleep(self.sample_interval)?;

        let cpu = provider.cpu()?;
        let memory = provider.memory()?;
        let disks = collect_disks(provider)?;
        let processes = if process_limit > 0 {
            collect_top_processes(provider, process_limit)?
        } else {
            Vec::new()
        };

        Ok(Snapshot {
            taken_at: Utc::now(),
            cpu,
            memory,
            disks,
            processes,
        })
    }
}

fn collect_disks(provider: &mut dyn MetricsProvider) -> Result<Vec<DiskReading>> {
    let partitions = provider.partitions()?;
    let mut disks = Vec::with_capacity(partitions.len());

    for partition in partitions {
        match provider.disk_usage(&partition) {
            Ok(usage) => disks.push(DiskReading {
                device: partition.device,
                mount_point: partition.mount_point,
                total: usage.total,
                used: usage.used,
                free: usage.free,
                percent: percent_of(usage.used, usage.total),
            }),
            Err(e) => debug!("Skipping mount {}: {}", partition.mount_point, e),
        }
    }

    Ok(disks)
}

fn collect_top_processes(
    provider: &mut dyn MetricsProvider,
    limit: usize,
) -> Result<Vec<ProcessReading>> {
    let pids = provider.process_ids()?;

    let processes = pids
        .into_iter()
        .filter_map(|pid| match provider.process(pid) {
            Ok(process) => Some(process),
            Err(e) => {
                debug!("Skipping pid {}: {}", pid, e);
                None
            }
        })
        .collect();

    Ok(rank_processes(processes, limit))
}

/// Sort by CPU usage descending and keep the first `limit`.
///
/// The sort is stable: equal CPU usage keeps enumeration order.
pub fn rank_processes(mut processes: Vec<ProcessReading>, limit: usize) -> Vec<ProcessReading> {
    processes.sort_by(|a, b| sort_key(b.cpu_percent).total_cmp(&sort_key(a.cpu_percent)));
    processes.truncate(limit);
    processes
}

// NaN ranks as idle; adding 0.0 folds -0.0 into 0.0 so they tie
fn sort_key(cpu_percent: f64) -> f64 {
    if cpu_percent.is_nan() {
        0.0
    } else {
        cpu_percent + 0.0
    }
}
