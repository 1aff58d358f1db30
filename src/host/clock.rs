//! Process uptime.

use std::time::{Duration, Instant};

/// Start-of-process marker.
///
/// Capture once in `main` before anything else; handlers hold a copy.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started_at: Instant,
}

impl ProcessClock {
    /// Start the clock now.
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Elapsed time since start. Never decreases.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Elapsed seconds, as reported in response bodies.
    pub fn uptime_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}
