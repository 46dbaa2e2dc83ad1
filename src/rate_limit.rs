//! Outbound call pacing. Detection and translation share one limiter
//! because they draw on the same upstream request budget.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Enforces a minimum interval between consecutive `acquire` calls,
/// globally across all tasks.
pub struct RateLimiter {
    last_call: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_call: Mutex::new(None),
            min_interval,
        }
    }

    /// Wait until at least `min_interval` has passed since the previous
    /// `acquire` returned, then record the new last-call instant.
    /// The lock is held across the sleep, so concurrent callers are
    /// serialized and the spacing invariant holds globally. Never fails.
    pub async fn acquire(&self) {
        let mut last = self.last_call.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
