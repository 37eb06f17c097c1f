//! Continuously refreshed dashboard.
//!
//! Runs until Ctrl+C. An interrupt is a normal exit, not an error.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::ArgMatches;
use colored::Colorize;
use std::time::Duration;

use crate::core::{Monitor, Report};
use crate::ui::{self, report};

const TITLE: &str = concat!("System Health Dashboard v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    pub detailed: bool,
    pub refresh: Duration,
}

impl DashboardOptions {
    /// Options used when no subcommand is given
    pub fn from_config(monitor: &Monitor) -> Self {
        Self {
            detailed: false,
            refresh: monitor.config().refresh_interval(),
        }
    }

    pub fn from_matches(matches: &ArgMatches, monitor: &Monitor) -> Self {
        Self {
            detailed: matches.get_flag("detailed"),
            refresh: matches
                .get_one::<Duration>("refresh")
                .copied()
                .unwrap_or_else(|| monitor.config().refresh_interval()),
        }
    }
}

/// Execute the dashboard command
pub fn execute(monitor: &mut Monitor, matches: &ArgMatches) -> Result<()> {
    let options = DashboardOptions::from_matches(matches, monitor);
    run(monitor, &options)
}

pub fn run(monitor: &mut Monitor, options: &DashboardOptions) -> Result<()> {
    let process_limit = if options.detailed {
        monitor.config().display.process_count
    } else {
        0
    };
    let stop = monitor.stop_signal().clone();

    log::debug!(
        "Dashboard refresh {:?}, detailed: {}",
        options.refresh,
        options.detailed
    );

    loop {
        let report = match monitor.report(process_limit) {
            Ok(report) => report,
            Err(e) if e.is_interrupt() => break,
            Err(e) => return Err(e).context("Failed to collect system metrics"),
        };

        ui::clear_screen().context("Failed to clear terminal")?;
        print!("{}", render_frame(monitor, &report, options.detailed));

        if stop.sleep(options.refresh).is_err() {
            break;
        }
    }

    println!();
    println!("{}", "Dashboard stopped".yellow());

    Ok(())
}

fn render_frame(monitor: &Monitor, report: &Report, detailed: bool) -> String {
    let identity = monitor.identity();
    let mut out = String::new();

    out.push_str(&report::banner(TITLE));
    out.push('\n');
    if identity.is_cachyos {
        out.push_str(&format!(
            "{}\n",
            "CachyOS Performance System Detected!".green().bold()
        ));
    }
    out.push('\n');

    out.push_str(&report::dashboard_table(&report.snapshot).render());

    if detailed {
        out.push('\n');
        out.push_str(&report::process_table(&report.snapshot.processes).render());
    }

    out.push('\n');
    out.push_str(&report::alerts_section(&report.alerts));
    out.push_str("\n\n");

    let footer = report::footer(identity, &report.snapshot, Utc::now());
    out.push_str(&format!("{}\n", footer.dimmed()));
    out.push_str(&format!("{}\n", "Press Ctrl+C to exit".dimmed()));

    out
}

/// Parse `--refresh`: `500ms`, `2s`, `1m`, or a bare number of seconds
pub fn parse_refresh_interval(input: &str) -> std::result::Result<Duration, String> {
    let input = input.trim();
    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (digits, unit) = input.split_at(split);

    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid refresh interval '{}'", input))?;

    let duration = match unit.trim() {
        "ms" => Duration::from_millis(value),
        "" | "s" => Duration::from_secs(value),
        "m" => Duration::from_secs(
            value
                .checked_mul(60)
                .ok_or_else(|| format!("refresh interval '{}' is too large", input))?,
        ),
        other => {
            return Err(format!(
                "unknown unit '{}' in refresh interval (use ms, s or m)",
                other
            ))
        }
    };

    if duration.is_zero() {
        return Err("refresh interval must be greater than zero".to_string());
    }

    Ok(duration)
}
