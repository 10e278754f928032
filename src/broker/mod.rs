//! Broker module - control state, command ingress and device liveness

pub mod clock;
mod ingress;
mod liveness;
mod status;
mod store;

pub use self::clock::{Clock, SystemClock};
pub use self::ingress::CommandIngress;
pub use self::liveness::LivenessTracker;
pub use self::status::{StatusQuery, NEVER_SEEN_DIFF_MS};
pub use self::store::ControlStateStore;

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Shared request-handling state, injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ControlStateStore>,
    pub ingress: CommandIngress,
    pub liveness: Arc<LivenessTracker>,
    pub status: Arc<StatusQuery>,
    pub console_enabled: bool,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build the state around an explicit clock
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(ControlStateStore::new());
        let ingress = CommandIngress::new(store.clone());
        let liveness = Arc::new(LivenessTracker::new(clock.clone()));
        let status = Arc::new(StatusQuery::new(
            liveness.clone(),
            clock,
            config.liveness.threshold(),
        ));

        Self {
            store,
            ingress,
            liveness,
            status,
            console_enabled: config.console.enabled,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
