//! Alert system for monitoring critical conditions.
//!
//! Compares a snapshot against the configured thresholds. A metric alerts only
//! when it is strictly above its threshold; missing (zero or NaN) data never alerts.

use serde::{Deserialize, Serialize};

use super::metrics::Snapshot;
use crate::core::config::AlertThresholds;

/// An individual alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub value: f64,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Cpu,
    Memory,
    Disk(String), // Mount point
}

/// Alerts raised by one snapshot. Empty means every metric is within its threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertSet {
    alerts: Vec<Alert>,
}

impl AlertSet {
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.alerts.iter().map(|a| a.message.as_str()).collect()
    }

    pub fn contains(&self, kind: &AlertKind) -> bool {
        self.alerts.iter().any(|a| &a.kind == kind)
    }
}

fn exceeds(value: f64, threshold: f64) -> bool {
    value > threshold
}

/// Evaluate a snapshot against the alert thresholds
pub fn evaluate_alerts(snapshot: &Snapshot, thresholds: &AlertThresholds) -> AlertSet {
    let mut alerts = Vec::new();

    let cpu = snapshot.cpu.usage_percent;
    if exceeds(cpu, thresholds.cpu_threshold) {
        alerts.push(Alert {
            kind: AlertKind::Cpu,
            message: format!(
                "CPU usage at {:.1}% (threshold: {}%)",
                cpu, thresholds.cpu_threshold
            ),
            value: cpu,
            threshold: thresholds.cpu_threshold,
        });
    }

    let memory = snapshot.memory.percent;
    if exceeds(memory, thresholds.ram_threshold) {
        alerts.push(Alert {
            kind: AlertKind::Memory,
            message: format!(
                "Memory usage at {:.1}% (threshold: {}%)",
                memory, thresholds.ram_threshold
            ),
            value: memory,
            threshold: thresholds.ram_threshold,
        });
    }

    for disk in &snapshot.disks {
        if exceeds(disk.percent, thresholds.disk_threshold) {
            alerts.push(Alert {
                kind: AlertKind::Disk(disk.mount_point.clone()),
                message: format!(
                    "Disk {} at {:.1}% capacity (threshold: {}%)",
                    disk.mount_point, disk.percent, thresholds.disk_threshold
                ),
                value: disk.percent,
                threshold: thresholds.disk_threshold,
            });
        }
    }

    AlertSet { alerts }
}
