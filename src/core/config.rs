use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::paths::AppPaths;

/// Dashboard preferences, persisted as `config.json`.
///
/// Read once at startup; fields missing from the file take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds between dashboard refreshes
    pub refresh_interval: u64,
    pub alerts: AlertThresholds,
    pub display: DisplayOptions,
}

/// Usage percentages above which an alert is raised.
///
/// Any JSON number is accepted; values outside 0..=100 are clamped on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub cpu_threshold: f64,
    pub ram_threshold: f64,
    pub disk_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_processes: bool,
    pub process_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval: 2,
            alerts: AlertThresholds::default(),
            display: DisplayOptions::default(),
        }
    }
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            cpu_threshold: 80.0,
            ram_threshold: 85.0,
            disk_threshold: 90.0,
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_processes: true,
            process_count: 10,
        }
    }
}

impl Config {
    pub fn load(paths: &AppPaths) -> Result<Self> {
        Self::load_from(&paths.config_file())
    }

    /// Load the config file, creating it with defaults when absent.
    ///
    /// An unreadable or malformed file is not an error: defaults are used in
    /// memory and the file is left as it is.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config at {:?}, writing defaults", config_path);
            let config = Config::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let data = match fs::read_to_string(config_path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", config_path, e);
                return Ok(Config::default());
            }
        };

        match serde_json::from_str::<Config>(&data) {
            Ok(config) => Ok(config.sanitized()),
            Err(e) => {
                warn!(
                    "Config file {:?} is malformed ({}), using defaults",
                    config_path, e
                );
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self, paths: &AppPaths) -> Result<()> {
        self.save_to(&paths.config_file())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    /// Clamp values a hand-edited file could get wrong
    fn sanitized(mut self) -> Self {
        if self.refresh_interval == 0 {
            warn!("refresh_interval must be positive, using 1 second");
            self.refresh_interval = 1;
        }

        for (name, value) in [
            ("cpu_threshold", &mut self.alerts.cpu_threshold),
            ("ram_threshold", &mut self.alerts.ram_threshold),
            ("disk_threshold", &mut self.alerts.disk_threshold),
        ] {
            let clamped = value.clamp(0.0, 100.0);
            if clamped != *value {
                warn!("alerts.{} = {} is outside 0..=100, using {}", name, value, clamped);
                *value = clamped;
            }
        }

        self
    }
}
