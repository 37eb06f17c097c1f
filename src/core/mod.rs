// Core business logic module

pub mod config;
pub mod monitor;
pub mod paths;
pub mod signal;
pub mod system_monitor;

// Re-export commonly used items
pub use config::{AlertThresholds, Config, DisplayOptions};
pub use monitor::{Monitor, Report};
pub use paths::AppPaths;
pub use signal::StopSignal;
