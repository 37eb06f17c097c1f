use std::io;
use thiserror::Error;

/// Custom error type for the health dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Metrics provider error: {0}")]
    Provider(String),

    #[error("Signal handler error: {0}")]
    Signal(String),

    #[error("Interrupted by user")]
    Interrupted,
}

/// Result type alias for the health dashboard
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Create a provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        DashboardError::Provider(msg.into())
    }

    pub fn signal<S: Into<String>>(msg: S) -> Self {
        DashboardError::Signal(msg.into())
    }

    /// True when the error only means the user pressed Ctrl+C
    pub fn is_interrupt(&self) -> bool {
        matches!(self, DashboardError::Interrupted)
    }
}

/// Failure reading a single item (one mount, one process).
///
/// These never abort a snapshot; the item is dropped and collection continues.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("process {0} no longer exists")]
    Vanished(u32),

    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ProbeError {
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        ProbeError::Unavailable(msg.into())
    }
}
