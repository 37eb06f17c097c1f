//! Views of a [`Report`] for the `status` and `dashboard` commands.
//!
//! Everything here builds strings or tables; printing is left to the caller.

use chrono::{DateTime, Utc};
use colored::{Color, Colorize};

use super::formatters::{format_bytes, format_uptime, progress_bar};
use super::table::{truncate_width, Table};
use crate::core::system_monitor::{AlertSet, ProcessReading, Snapshot, SystemIdentity};

const BAR_WIDTH: usize = 10;
const PROCESS_NAME_WIDTH: usize = 20;
/// The dashboard only has room for the first few mounts
pub const DASHBOARD_DISK_ROWS: usize = 3;

pub const NORMAL_STATUS: &str = "All systems normal";

/// Boxed, bold heading: the dashboard and status banners
pub fn banner(text: &str) -> String {
    let rule = "─".repeat(text.chars().count() + 2);
    format!(
        "{}\n{}\n{}",
        format!("╭{}╮", rule).blue(),
        format!("│ {} │", text.bold()).blue(),
        format!("╰{}╯", rule).blue()
    )
}

fn usage_cell(percent: f64) -> String {
    format!("{} {:.1}%", progress_bar(percent, BAR_WIDTH), percent)
}

pub fn system_info_table(identity: &SystemIdentity, now: DateTime<Utc>) -> Table {
    let mut table = Table::new("System Information")
        .column("Metric", Color::Cyan)
        .column("Value", Color::Green);

    table.add_row(["Hostname", identity.hostname.as_str()]);
    table.add_row(["OS", identity.os_name.as_str()]);
    table.add_row(["Kernel", identity.kernel_version.as_str()]);
    table.add_row(["CPUs".to_string(), identity.cpu_count.to_string()]);
    table.add_row(["Total Memory".to_string(), format_bytes(identity.total_memory)]);
    table.add_row(["Uptime".to_string(), format_uptime(identity.boot_time, now)]);

    if identity.is_cachyos {
        table.add_row(["Performance", "CachyOS Optimized"]);
    }

    table
}

/// Full metrics table for `status`: CPU, memory, swap, load and every disk
pub fn performance_table(snapshot: &Snapshot) -> Table {
    let mut table = Table::new("Performance Metrics")
        .column("Component", Color::Cyan)
        .column("Usage", Color::Green)
        .column("Details", Color::Yellow);

    let cpu = &snapshot.cpu;
    let mem = &snapshot.memory;

    table.add_row([
        "CPU".to_string(),
        usage_cell(cpu.usage_percent),
        format!("{} MHz | Cores: {}", cpu.frequency_mhz, cpu.core_count),
    ]);
    table.add_row([
        "Memory".to_string(),
        usage_cell(mem.percent),
        format!("{} / {}", format_bytes(mem.used), format_bytes(mem.total)),
    ]);
    table.add_row([
        "Swap".to_string(),
        usage_cell(mem.swap_percent),
        format!("{} / {}", format_bytes(mem.swap_used), format_bytes(mem.swap_total)),
    ]);
    table.add_row([
        "Load Average".to_string(),
        format!("{:.2}", cpu.load_average.one),
        format!(
            "1min average | 5m {:.2} | 15m {:.2}",
            cpu.load_average.five, cpu.load_average.fifteen
        ),
    ]);

    for disk in &snapshot.disks {
        table.add_row([
            format!("Disk ({})", disk.mount_point),
            usage_cell(disk.percent),
            format!("Free: {} of {}", format_bytes(disk.free), format_bytes(disk.total)),
        ]);
    }

    table
}

/// Compact table redrawn on every dashboard refresh
pub fn dashboard_table(snapshot: &Snapshot) -> Table {
    let mut table = Table::new("System Status")
        .column("Component", Color::Cyan)
        .column("Usage", Color::Green)
        .column("Details", Color::Yellow);

    let cpu = &snapshot.cpu;
    let mem = &snapshot.memory;

    table.add_row([
        "CPU".to_string(),
        usage_cell(cpu.usage_percent),
        format!("Freq: {}MHz | Cores: {}", cpu.frequency_mhz, cpu.core_count),
    ]);
    table.add_row([
        "Memory".to_string(),
        usage_cell(mem.percent),
        format!("Used: {} / {}", format_bytes(mem.used), format_bytes(mem.total)),
    ]);

    for disk in snapshot.disks.iter().take(DASHBOARD_DISK_ROWS) {
        table.add_row([
            format!("Disk ({})", disk.mount_point),
            usage_cell(disk.percent),
            format!("Free: {}", format_bytes(disk.free)),
        ]);
    }

    table
}

pub fn process_table(processes: &[ProcessReading]) -> Table {
    let mut table = Table::new("Top Processes")
        .column("PID", Color::Cyan)
        .column("Name", Color::Green)
        .column("CPU%", Color::Yellow)
        .column("Memory%", Color::Red);

    for process in processes {
        table.add_row([
            process.pid.to_string(),
            truncate_width(&process.name, PROCESS_NAME_WIDTH),
            format!("{:.1}", process.cpu_percent),
            format!("{:.1}", process.memory_percent),
        ]);
    }

    table
}

/// Alert lines, or the single "normal" line when nothing fired
pub fn alerts_section(alerts: &AlertSet) -> String {
    if alerts.is_empty() {
        return format!("{} {}", "✓".green(), NORMAL_STATUS.green());
    }

    let mut out = format!("{}", "Alerts".red().bold());
    for alert in alerts.iter() {
        out.push_str(&format!("\n  {} {}", "⚠".yellow(), alert.message.red()));
    }
    out
}

pub fn footer(identity: &SystemIdentity, snapshot: &Snapshot, now: DateTime<Utc>) -> String {
    format!(
        "Uptime: {} | Load: {:.2}",
        format_uptime(identity.boot_time, now),
        snapshot.cpu.load_average.one
    )
}
