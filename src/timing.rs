//! Step timing.

use std::time::{Duration, Instant};

/// Measures how long an install step takes and reports it at `debug` level.
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    /// Start a new timer for the named step.
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the elapsed time.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        let secs = elapsed.as_secs_f64();
        if secs >= 60.0 {
            tracing::debug!(step = self.name, "finished in {:.1}m", secs / 60.0);
        } else {
            tracing::debug!(step = self.name, "finished in {:.1}s", secs);
        }
        elapsed
    }
}
