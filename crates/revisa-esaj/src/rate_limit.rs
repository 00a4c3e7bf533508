//! Fixed-delay pacing between outbound lookups.
//!
//! The portal tolerates slow sequential traffic; the pacer keeps that policy
//! out of the batch loop so a future concurrent runner can swap in a
//! token-based limiter without touching orchestration logic.

use std::time::Duration;

/// Upper bound on the configurable inter-request delay, in seconds.
/// Matches the range the original operator controls expose.
pub const MAX_DELAY_SECS: u64 = 5;

/// Pauses between consecutive lookups.
#[derive(Debug, Clone, Copy)]
pub struct RequestPacer {
    delay: Duration,
}

impl RequestPacer {
    /// Creates a pacer with `delay_secs` clamped to `0..=MAX_DELAY_SECS`.
    #[must_use]
    pub fn new(delay_secs: u64) -> Self {
        Self {
            delay: Duration::from_secs(delay_secs.min(MAX_DELAY_SECS)),
        }
    }

    /// The effective (clamped) delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the configured delay; returns immediately when zero.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
