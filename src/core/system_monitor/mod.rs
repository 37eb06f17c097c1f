//! System monitoring core functionality.
//!
//! This module provides the business logic for sampling CPU, memory, disk and
//! process state into snapshots and evaluating them against alert thresholds.

pub mod alerts;
mod collector;
pub mod identity;
mod metrics;
pub mod provider;

pub use alerts::{evaluate_alerts, Alert, AlertKind, AlertSet};
pub use collector::{default_sample_interval, rank_processes, SnapshotBuilder};
pub use identity::{SystemIdentity, OS_RELEASE_PATH};
pub use metrics::{
    percent_of, CpuReading, DiskReading, LoadAverage, MemoryReading, ProcessReading, Snapshot,
};
pub use provider::{DiskUsage, HostFacts, MetricsProvider, Partition, SysinfoProvider};
