// Command handlers module
pub mod config;
pub mod dashboard;
pub mod status;

use clap::{Arg, ArgAction, Command};

/// Command-line definition; shared by `main` and the CLI tests
pub fn build_cli() -> Command {
    Command::new("health-dashboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("System Health Dashboard - monitor CPU, memory, disks and processes")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging (RUST_LOG overrides)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Launch the real-time system dashboard (default)")
                .arg(
                    Arg::new("detailed")
                        .long("detailed")
                        .help("Include the top processes table")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("refresh")
                        .long("refresh")
                        .value_name("DURATION")
                        .help("Refresh interval, e.g. 2s, 500ms, 1m (default: config refresh_interval)")
                        .value_parser(dashboard::parse_refresh_interval),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Show current system status once and exit")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the snapshot and alerts as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show the effective configuration")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help("Only print the config file location")
                        .action(ArgAction::SetTrue),
                ),
        )
}
