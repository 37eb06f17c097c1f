use anyhow::{Context, Result};
use chrono::Utc;
use clap::ArgMatches;
use colored::Colorize;

use crate::core::Monitor;
use crate::ui::report;

pub fn execute(monitor: &mut Monitor, matches: &ArgMatches) -> Result<()> {
    let json = matches.get_flag("json");

    let display = &monitor.config().display;
    let process_limit = if display.show_processes {
        display.process_count
    } else {
        0
    };

    let report = match monitor.report(process_limit) {
        Ok(report) => report,
        Err(e) if e.is_interrupt() => {
            println!("{}", "Interrupted".yellow());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to collect system metrics"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let now = Utc::now();

    println!("{}", report::banner("System Status"));
    println!();
    print!("{}", report::system_info_table(monitor.identity(), now).render());
    println!();
    print!("{}", report::performance_table(&report.snapshot).render());

    if !report.snapshot.processes.is_empty() {
        println!();
        print!("{}", report::process_table(&report.snapshot.processes).render());
    }

    println!();
    println!("{}", report::alerts_section(&report.alerts));

    Ok(())
}
