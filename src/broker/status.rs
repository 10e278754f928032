//! Status query - derives the device connectivity verdict
//!
//! The verdict is recomputed on every call from the clock and the last fetch
//! instant. There is no stored online/offline state and no debounce.

use std::sync::Arc;
use std::time::Duration;

use crate::models::LinkStatus;

use super::clock::Clock;
use super::liveness::LivenessTracker;

/// `diff` reported when the device has never polled
pub const NEVER_SEEN_DIFF_MS: i64 = i64::MAX;

pub struct StatusQuery {
    liveness: Arc<LivenessTracker>,
    clock: Arc<dyn Clock>,
    threshold: Duration,
}

impl StatusQuery {
    pub fn new(liveness: Arc<LivenessTracker>, clock: Arc<dyn Clock>, threshold: Duration) -> Self {
        Self {
            liveness,
            clock,
            threshold,
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub async fn evaluate(&self) -> LinkStatus {
        let Some(last_seen) = self.liveness.last_seen().await else {
            return LinkStatus {
                connected: false,
                diff_ms: NEVER_SEEN_DIFF_MS,
            };
        };

        let elapsed = self.clock.now().saturating_duration_since(last_seen);
        LinkStatus {
            connected: elapsed < self.threshold,
            diff_ms: i64::try_from(elapsed.as_millis()).unwrap_or(NEVER_SEEN_DIFF_MS),
        }
    }
}
