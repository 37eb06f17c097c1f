//! Ctrl+C handling.
//!
//! The handler only flips a flag. Long waits go through [`StopSignal::sleep`],
//! which wakes in short slices so an interrupt is noticed almost immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{DashboardError, Result};

const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Shared cancellation flag, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    /// A signal that is only ever raised manually (tests, one-shot commands)
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a process-wide Ctrl+C handler that raises this signal.
    ///
    /// `ctrlc` allows a single handler per process; a second call fails.
    pub fn install_ctrlc() -> Result<Self> {
        let signal = Self::new();
        let handler_signal = signal.clone();

        ctrlc::set_handler(move || handler_signal.stop())
            .map_err(|e| DashboardError::signal(format!("Failed to set Ctrl+C handler: {}", e)))?;

        Ok(signal)
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Sleep for `duration` unless stopped first.
    ///
    /// Returns `Err(Interrupted)` if the signal was raised before or during the wait.
    /// A duration too large to represent as a deadline waits until stopped.
    pub fn sleep(&self, duration: Duration) -> Result<()> {
        let deadline = Instant::now().checked_add(duration);

        loop {
            if self.is_stopped() {
                return Err(DashboardError::Interrupted);
            }

            let slice = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(());
                    }
                    SLEEP_SLICE.min(deadline - now)
                }
                None => SLEEP_SLICE,
            };

            thread::sleep(slice);
        }
    }
}
