//! Static host facts gathered once at startup.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;

use super::provider::MetricsProvider;
use crate::error::{DashboardError, Result};

/// Distribution descriptor inspected for the CachyOS marker
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

const CACHYOS_MARKER: &str = "cachyos";
const CACHYOS_NAME: &str = "CachyOS Linux";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemIdentity {
    pub os_name: String,
    pub kernel_version: String,
    pub hostname: String,
    pub cpu_count: usize,
    pub total_memory: u64,
    pub boot_time: DateTime<Utc>,
    pub is_cachyos: bool,
}

impl SystemIdentity {
    /// Resolve every field or none of them.
    ///
    /// If any provider fact is missing, or the descriptor exists but cannot be
    /// read, the result is [`SystemIdentity::fallback`]. A missing descriptor
    /// only means the host is not CachyOS.
    pub fn resolve(provider: &mut dyn MetricsProvider, os_release: &Path) -> Self {
        Self::try_resolve(provider, os_release).unwrap_or_else(|e| {
            warn!("Failed to resolve system identity: {}", e);
            Self::fallback()
        })
    }

    fn try_resolve(provider: &mut dyn MetricsProvider, os_release: &Path) -> Result<Self> {
        let facts = provider.host_facts();

        let missing = |field: &str| DashboardError::provider(format!("{} unavailable", field));

        let os_name = facts.os_name.ok_or_else(|| missing("OS name"))?;
        let kernel_version = facts.kernel_version.ok_or_else(|| missing("kernel version"))?;
        let hostname = facts.hostname.ok_or_else(|| missing("hostname"))?;
        let cpu_count = facts.cpu_count.ok_or_else(|| missing("CPU count"))?;
        let total_memory = facts.total_memory.ok_or_else(|| missing("total memory"))?;
        let boot_time = facts
            .boot_time
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| missing("boot time"))?;

        let is_cachyos = detect_cachyos(os_release)?;

        Ok(Self {
            os_name: if is_cachyos {
                CACHYOS_NAME.to_string()
            } else {
                os_name
            },
            kernel_version,
            hostname,
            cpu_count,
            total_memory,
            boot_time,
            is_cachyos,
        })
    }

    pub fn fallback() -> Self {
        Self {
            os_name: "Unknown".to_string(),
            kernel_version: "Unknown".to_string(),
            hostname: "localhost".to_string(),
            cpu_count: 1,
            total_memory: 0,
            boot_time: Utc::now(),
            is_cachyos: false,
        }
    }
}

fn detect_cachyos(os_release: &Path) -> io::Result<bool> {
    match fs::read_to_string(os_release) {
        Ok(contents) => Ok(contents.to_lowercase().contains(CACHYOS_MARKER)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
