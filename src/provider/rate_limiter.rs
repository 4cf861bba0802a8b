// Minimum-interval rate limiter for provider calls.
//
// Provider plans are metered per second. Each call reserves the next free
// slot under the lock, then sleeps outside it, so concurrent searches queue
// up in order instead of all waking at once.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

#[derive(Clone)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Allow at most `requests_per_second` calls. Zero disables limiting.
    /// Negative or non-finite rates, and rates so small the interval can't
    /// be represented, are rejected.
    pub fn new(requests_per_second: f64) -> Result<Self> {
        if !requests_per_second.is_finite() || requests_per_second < 0.0 {
            anyhow::bail!("invalid request rate {requests_per_second}: must be a finite number >= 0");
        }
        let interval = if requests_per_second == 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(1.0 / requests_per_second).with_context(|| {
                format!("request rate {requests_per_second} is too small to schedule")
            })?
        };
        Ok(Self {
            interval,
            next_slot: Arc::new(Mutex::new(None)),
        })
    }

    /// Wait for this caller's slot.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }

        let wait_until = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };

        tokio::time::sleep_until(wait_until).await;
    }
}
