//! Owned scene clock.
//!
//! The host feeds frame timestamps in milliseconds (for example the value a
//! `requestAnimationFrame` callback receives). The first timestamp becomes the
//! origin. Elapsed time never moves backward, even if a timestamp does.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

#[derive(Debug, Clone, Copy, Default)]
pub struct SceneClock {
    origin_ms: Option<f64>,
    elapsed_secs: f64,
}

impl SceneClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now_ms` and return elapsed seconds since the first tick.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return self.elapsed_secs;
        }
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let elapsed = ((now_ms - origin) / 1000.0).max(0.0);
        if elapsed > self.elapsed_secs {
            self.elapsed_secs = elapsed;
        }
        self.elapsed_secs
    }

    /// Elapsed seconds as of the last tick.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed_secs
    }

    /// Whether at least one tick has been observed.
    #[must_use]
    pub fn started(&self) -> bool {
        self.origin_ms.is_some()
    }
}
