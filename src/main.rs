use anyhow::{Context, Result};
use std::path::Path;

use health_dashboard::commands::{self, build_cli, dashboard::DashboardOptions};
use health_dashboard::core::system_monitor::{SnapshotBuilder, SysinfoProvider, OS_RELEASE_PATH};
use health_dashboard::core::{AppPaths, Config, Monitor, StopSignal};
use health_dashboard::init_logging;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let paths = AppPaths::resolve()?;
    paths.ensure()?;

    let config = Config::load(&paths)?;

    if let Some(("config", sub_matches)) = matches.subcommand() {
        return commands::config::execute(&paths, &config, sub_matches);
    }

    let stop = StopSignal::install_ctrlc()?;
    let provider = SysinfoProvider::new().context("Failed to initialize metrics provider")?;
    let builder = SnapshotBuilder::new(stop);

    let mut monitor = Monitor::new(
        config,
        Box::new(provider),
        builder,
        Path::new(OS_RELEASE_PATH),
    );

    match matches.subcommand() {
        Some(("status", sub_matches)) => commands::status::execute(&mut monitor, sub_matches),
        Some(("dashboard", sub_matches)) => commands::dashboard::execute(&mut monitor, sub_matches),
        _ => {
            let options = DashboardOptions::from_config(&monitor);
            commands::dashboard::run(&mut monitor, &options)
        }
    }
}
