use crate::core::{AppPaths, Config};
use anyhow::{Context, Result};
use colored::Colorize;

/// Print the effective configuration, or just where it lives
pub fn execute(paths: &AppPaths, config: &Config, matches: &clap::ArgMatches) -> Result<()> {
    let config_file = paths.config_file();

    if matches.get_flag("path") {
        println!("{}", config_file.display());
        return Ok(());
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

    println!("{} {}", "Config file:".white(), config_file.display().to_string().cyan());
    println!("{} {}", "Data directory:".white(), paths.data_dir().display().to_string().cyan());
    println!();
    println!("{}", json);

    Ok(())
}
