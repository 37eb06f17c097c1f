// Health Dashboard Library - Public API

// Re-export error types
pub mod error;
pub use error::{DashboardError, ProbeError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::{Monitor, Report};

// Initialize logging. Logs go to stderr so they never interleave with tables.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
