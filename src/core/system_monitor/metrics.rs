use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of the host, rebuilt on every refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub taken_at: DateTime<Utc>,
    pub cpu: CpuReading,
    pub memory: MemoryReading,
    pub disks: Vec<DiskReading>,
    /// Top processes by CPU usage, highest first
    pub processes: Vec<ProcessReading>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuReading {
    pub usage_percent: f64,
    /// 0 when the platform does not report a frequency
    pub frequency_mhz: u64,
    pub load_average: LoadAverage,
    pub core_count: usize,
}

/// 1, 5 and 15 minute load averages; all zero where the OS has no such concept
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryReading {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
    pub swap_total: u64,
    pub swap_used: u64,
    pub swap_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskReading {
    pub device: String,
    pub mount_point: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessReading {
    pub pid: u32,
    pub name: String,
    /// Share of the whole host, 0..=100 regardless of core count
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

/// `part / whole * 100`, or 0 when `whole` is 0
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}

impl Snapshot {
    /// Snapshot with no readings, stamped now
    pub fn empty() -> Self {
        Self {
            taken_at: Utc::now(),
            cpu: CpuReading::default(),
            memory: MemoryReading::default(),
            disks: Vec::new(),
            processes: Vec::new(),
        }
    }
}
