//! Scan timing abstraction.
//!
//! The simulated analysis is a timer-driven suspension, not a background
//! worker. The clock is a trait so flow tests run without wall-clock
//! delays.

use async_trait::async_trait;
use std::time::Duration;

/// Clock driving the simulated scan delays.
#[async_trait]
pub trait ScanClock: Send + Sync {
    /// Suspend for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Real clock backed by the tokio timer.
pub struct TokioClock;

#[async_trait]
impl ScanClock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Clock that completes immediately, for tests.
pub struct InstantClock;

#[async_trait]
impl ScanClock for InstantClock {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_clock_does_not_wait() {
        let start = std::time::Instant::now();
        InstantClock.sleep(Duration::from_secs(60)).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
