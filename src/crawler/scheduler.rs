//! Request scheduler for the crawl
//!
//! This module handles:
//! - Global concurrency limiting via a semaphore
//! - A random delay taken before each request while holding the slot

use crate::config::CrawlerConfig;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Scheduler gates every request through a shared slot pool
///
/// Clones share the same pool, so one scheduler can be handed to each crawl
/// task.
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Global semaphore for limiting concurrent fetches
    global_semaphore: Arc<Semaphore>,

    /// Upper bound of the delay taken before each request
    max_delay: Duration,
}

impl Scheduler {
    /// Creates a new scheduler from the crawler configuration
    pub fn new(config: &CrawlerConfig) -> Self {
        Self {
            global_semaphore: Arc::new(Semaphore::new(config.parallelism as usize)),
            max_delay: Duration::from_millis(config.random_delay_ms),
        }
    }

    /// Waits for a free slot, then sleeps a random delay before returning it
    ///
    /// The request should be made while the returned permit is alive; dropping
    /// it frees the slot for the next waiting task.
    ///
    /// # Returns
    ///
    /// * `Some(OwnedSemaphorePermit)` - The caller may send its request
    /// * `None` - The semaphore was closed
    pub async fn acquire(&self) -> Option<OwnedSemaphorePermit> {
        let permit = self.global_semaphore.clone().acquire_owned().await.ok()?;

        let delay = random_delay(self.max_delay);
        if !delay.is_zero() {
            tracing::trace!("Throttling request by {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        Some(permit)
    }

    /// Returns the number of slots not currently held
    pub fn available_slots(&self) -> usize {
        self.global_semaphore.available_permits()
    }

    /// Returns the configured upper bound of the pre-request delay
    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }
}

/// Picks a delay uniformly between zero and `max`, inclusive, at millisecond
/// resolution
pub fn random_delay(max: Duration) -> Duration {
    let max_ms = max.as_millis() as u64;
    if max_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::rng().random_range(0..=max_ms))
}
