//! Liveness tracker - remembers when the device last fetched its state

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use super::clock::Clock;

pub struct LivenessTracker {
    clock: Arc<dyn Clock>,
    last_seen: RwLock<Option<Instant>>,
}

impl LivenessTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_seen: RwLock::new(None),
        }
    }

    /// Record a device fetch at the current instant.
    ///
    /// Returns the gap since the previous fetch, or `None` on the first one.
    /// Concurrent fetches race harmlessly; the last writer wins.
    pub async fn touch(&self) -> Option<Duration> {
        let now = self.clock.now();
        let previous = self.last_seen.write().await.replace(now);
        previous.map(|prev| now.saturating_duration_since(prev))
    }

    /// Instant of the most recent fetch, `None` if the device never polled
    pub async fn last_seen(&self) -> Option<Instant> {
        *self.last_seen.read().await
    }
}
