//! Source of raw OS readings.
//!
//! Everything the dashboard knows about the host comes through [`MetricsProvider`].
//! Whole-provider failures are `DashboardError`s; failures reading one mount or one
//! process are [`ProbeError`]s that callers are expected to skip.

use std::io;
use std::path::Path;

use sysinfo::{
    CpuRefreshKind, Disks, MemoryRefreshKind, Pid, ProcessRefreshKind, ProcessesToUpdate,
    RefreshKind, System,
};

use super::metrics::{percent_of, CpuReading, LoadAverage, MemoryReading, ProcessReading};
use crate::error::{DashboardError, ProbeError, Result};

/// A mounted filesystem as listed by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
}

/// Capacity figures for one partition, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Static host facts; `None` means the provider could not determine the value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostFacts {
    pub os_name: Option<String>,
    pub kernel_version: Option<String>,
    pub hostname: Option<String>,
    pub cpu_count: Option<usize>,
    pub total_memory: Option<u64>,
    /// Seconds since the Unix epoch
    pub boot_time: Option<u64>,
}

pub trait MetricsProvider {
    /// Take the first CPU measurement. Usage figures returned by [`cpu`](Self::cpu)
    /// and [`process`](Self::process) are deltas against this point.
    fn prime(&mut self) -> Result<()>;

    fn cpu(&mut self) -> Result<CpuReading>;

    fn memory(&mut self) -> Result<MemoryReading>;

    fn partitions(&mut self) -> Result<Vec<Partition>>;

    fn disk_usage(&self, partition: &Partition) -> std::result::Result<DiskUsage, ProbeError>;

    /// Live process ids, in enumeration order
    fn process_ids(&mut self) -> Result<Vec<u32>>;

    fn process(&self, pid: u32) -> std::result::Result<ProcessReading, ProbeError>;

    fn host_facts(&mut self) -> HostFacts;
}

/// Production provider backed by `sysinfo`
pub struct SysinfoProvider {
    system: System,
    disks: Disks,
}

impl SysinfoProvider {
    pub fn new() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(DashboardError::provider(format!(
                "sysinfo does not support this platform ({})",
                std::env::consts::OS
            )));
        }

        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        Ok(Self {
            system: System::new_with_specifics(refresh_kind),
            disks: Disks::new_with_refreshed_list(),
        })
    }

    fn refresh_processes(&mut self) {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cpu().with_memory(),
        );
    }
}

impl MetricsProvider for SysinfoProvider {
    fn prime(&mut self) -> Result<()> {
        self.system.refresh_cpu_usage();
        self.refresh_processes();
        Ok(())
    }

    fn cpu(&mut self) -> Result<CpuReading> {
        self.system.refresh_cpu_all();

        let cpus = self.system.cpus();
        let load = System::load_average();

        Ok(CpuReading {
            usage_percent: f64::from(self.system.global_cpu_usage()),
            frequency_mhz: cpus.first().map(|cpu| cpu.frequency()).unwrap_or(0),
            load_average: LoadAverage {
                one: load.one,
                five: load.five,
                fifteen: load.fifteen,
            },
            core_count: cpus.len(),
        })
    }

    fn memory(&mut self) -> Result<MemoryReading> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let used = self.system.used_memory();
        let swap_total = self.system.total_swap();
        let swap_used = self.system.used_swap();

        Ok(MemoryReading {
            total,
            used,
            free: self.system.free_memory(),
            percent: percent_of(used, total),
            swap_total,
            swap_used,
            swap_percent: percent_of(swap_used, swap_total),
        })
    }

    fn partitions(&mut self) -> Result<Vec<Partition>> {
        self.disks.refresh(true);

        Ok(self
            .disks
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_string_lossy().to_string(),
            })
            .collect())
    }

    fn disk_usage(&self, partition: &Partition) -> std::result::Result<DiskUsage, ProbeError> {
        std::fs::metadata(&partition.mount_point).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => {
                ProbeError::PermissionDenied(partition.mount_point.clone())
            }
            _ => ProbeError::Io(e),
        })?;

        let disk = self
            .disks
            .iter()
            .find(|disk| disk.mount_point() == Path::new(&partition.mount_point))
            .ok_or_else(|| {
                ProbeError::unavailable(format!("{} is no longer mounted", partition.mount_point))
            })?;

        let total = disk.total_space();
        if total == 0 {
            return Err(ProbeError::unavailable(format!(
                "{} reports no capacity",
                partition.mount_point
            )));
        }

        let free = disk.available_space();

        Ok(DiskUsage {
            total,
            used: total.saturating_sub(free),
            free,
        })
    }

    fn process_ids(&mut self) -> Result<Vec<u32>> {
        self.refresh_processes();

        let mut pids: Vec<u32> = self
            .system
            .processes()
            .keys()
            .map(|pid| pid.as_u32())
            .collect();
        pids.sort_unstable();

        Ok(pids)
    }

    fn process(&self, pid: u32) -> std::result::Result<ProcessReading, ProbeError> {
        let process = self
            .system
            .process(Pid::from_u32(pid))
            .ok_or(ProbeError::Vanished(pid))?;

        Ok(ProcessReading {
            pid,
            name: process.name().to_string_lossy().to_string(),
            cpu_percent: host_cpu_percent(process.cpu_usage(), self.system.cpus().len()),
            memory_percent: percent_of(process.memory(), self.system.total_memory()),
        })
    }

    fn host_facts(&mut self) -> HostFacts {
        let cpu_count = self.system.cpus().len();
        let total_memory = self.system.total_memory();
        let boot_time = System::boot_time();

        HostFacts {
            os_name: System::name(),
            kernel_version: System::kernel_version(),
            hostname: System::host_name(),
            cpu_count: (cpu_count > 0).then_some(cpu_count),
            total_memory: (total_memory > 0).then_some(total_memory),
            boot_time: (boot_time > 0).then_some(boot_time),
        }
    }
}

/// sysinfo reports process CPU per core (up to 100 x cores); scale it to the host
fn host_cpu_percent(per_core: f32, cores: usize) -> f64 {
    (f64::from(per_core) / cores.max(1) as f64).clamp(0.0, 100.0)
}
