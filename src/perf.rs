//! Performance timing utilities.
//!
//! RAII-style timers for dataset loads and page renders. A timer logs a
//! `warn!` when its scope runs past the threshold; with the `profiling`
//! feature enabled every timing is logged at `debug!`.
//!
//! ```ignore
//! use album_dashboard::perf::ScopedTimer;
//!
//! fn render_page() {
//!     let _timer = ScopedTimer::new("render_page", 50.0);
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::debug;
use tracing::warn;

/// Times the enclosing scope and logs when it is dropped
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Get the timer's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        debug!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
