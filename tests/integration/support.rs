use health_dashboard::core::system_monitor::{
    CpuReading, DiskUsage, HostFacts, MemoryReading, MetricsProvider, Partition, ProcessReading,
    SnapshotBuilder,
};
use health_dashboard::core::StopSignal;
use health_dashboard::{DashboardError, ProbeError, Result};
use std::time::Duration;

/// Scripted provider: `None` entries fail the per-item read
#[derive(Default)]
pub struct FakeProvider {
    pub cpu: CpuReading,
    pub memory: MemoryReading,
    pub mounts: Vec<(Partition, Option<DiskUsage>)>,
    pub processes: Vec<(u32, Option<ProcessReading>)>,
    pub facts: HostFacts,
    pub unreachable: bool,
    pub primed: usize,
}

impl FakeProvider {
    pub fn with_facts() -> Self {
        Self {
            facts: HostFacts {
                os_name: Some("Arch Linux".to_string()),
                kernel_version: Some("6.9.1-arch1".to_string()),
                hostname: Some("box".to_string()),
                cpu_count: Some(8),
                total_memory: Some(16 * 1024 * 1024 * 1024),
                boot_time: Some(1_700_000_000),
            },
            ..Default::default()
        }
    }

    pub fn mount(mut self, mount_point: &str, usage: Option<(u64, u64)>) -> Self {
        self.mounts.push((
            Partition {
                device: format!("/dev/{}", mount_point.trim_start_matches('/')),
                mount_point: mount_point.to_string(),
            },
            usage.map(|(total, used)| DiskUsage {
                total,
                used,
                free: total - used,
            }),
        ));
        self
    }

    pub fn process(mut self, pid: u32, cpu: Option<f64>) -> Self {
        self.processes.push((
            pid,
            cpu.map(|cpu_percent| ProcessReading {
                pid,
                name: format!("proc-{}", pid),
                cpu_percent,
                memory_percent: 0.5,
            }),
        ));
        self
    }

    fn check(&self) -> Result<()> {
        if self.unreachable {
            Err(DashboardError::provider("provider handle is gone"))
        } else {
            Ok(())
        }
    }
}

impl MetricsProvider for FakeProvider {
    fn prime(&mut self) -> Result<()> {
        self.check()?;
        self.primed += 1;
        Ok(())
    }

    fn cpu(&mut self) -> Result<CpuReading> {
        self.check()?;
        Ok(self.cpu.clone())
    }

    fn memory(&mut self) -> Result<MemoryReading> {
        self.check()?;
        Ok(self.memory.clone())
    }

    fn partitions(&mut self) -> Result<Vec<Partition>> {
        self.check()?;
        Ok(self.mounts.iter().map(|(p, _)| p.clone()).collect())
    }

    fn disk_usage(&self, partition: &Partition) -> std::result::Result<DiskUsage, ProbeError> {
        self.mounts
            .iter()
            .find(|(p, _)| p == partition)
            .and_then(|(_, usage)| *usage)
            .ok_or_else(|| ProbeError::PermissionDenied(partition.mount_point.clone()))
    }

    fn process_ids(&mut self) -> Result<Vec<u32>> {
        self.check()?;
        Ok(self.processes.iter().map(|(pid, _)| *pid).collect())
    }

    fn process(&self, pid: u32) -> std::result::Result<ProcessReading, ProbeError> {
        self.processes
            .iter()
            .find(|(p, _)| *p == pid)
            .and_then(|(_, reading)| reading.clone())
            .ok_or(ProbeError::Vanished(pid))
    }

    fn host_facts(&mut self) -> HostFacts {
        self.facts.clone()
    }
}

/// Builder that does not wait for a CPU sampling window
pub fn instant_builder() -> SnapshotBuilder {
    SnapshotBuilder::new(StopSignal::new()).with_sample_interval(Duration::ZERO)
}
