//! Artificial network latency.
//!
//! DESIGN
//! ======
//! The original simulator hard-codes an 800ms timer inside every call. Here
//! the delay is an explicit value injected into the context, so tests run at
//! zero latency and demos keep the realistic pause. No cancellation: a
//! second concurrent call just runs its own independent sleep.

use std::time::Duration;

/// Default simulated round-trip, matching the demo's 800ms timer.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

/// Configurable artificial delay applied at the start of every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    /// Zero delay. The sleep is skipped entirely, so tests never touch the timer.
    #[must_use]
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    #[must_use]
    pub fn delay(self) -> Duration {
        self.0
    }

    /// Wait out the configured delay.
    pub async fn simulate(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self(DEFAULT_DELAY)
    }
}

#[cfg(test)]
#[path = "latency_test.rs"]
mod tests;
