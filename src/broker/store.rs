//! Control state store - the single authoritative command record

use tokio::sync::RwLock;

use crate::models::{ControlPatch, ControlState};

/// Bound applied to `speed` and `steering` in both directions
pub const AXIS_LIMIT: i64 = 100;

/// Clamp an axis value into [-AXIS_LIMIT, AXIS_LIMIT]
pub fn clamp_axis(value: i64) -> i32 {
    value.clamp(-AXIS_LIMIT, AXIS_LIMIT) as i32
}

/// Owns the current [`ControlState`].
///
/// Every merge runs under the write lock, so readers see either the state
/// before a merge or after it, never a mix.
#[derive(Debug, Default)]
pub struct ControlStateStore {
    state: RwLock<ControlState>,
}

impl ControlStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all fields
    pub async fn get(&self) -> ControlState {
        self.state.read().await.clone()
    }

    /// Apply the fields present in `patch`, leaving the rest unchanged.
    /// Returns the state as of this merge.
    pub async fn merge(&self, patch: ControlPatch) -> ControlState {
        let mut state = self.state.write().await;

        if let Some(speed) = patch.speed {
            state.speed = clamp_axis(speed);
        }
        if let Some(steering) = patch.steering {
            state.steering = clamp_axis(steering);
        }

        if let Some(v) = patch.speed1 {
            state.speed1 = v;
        }
        if let Some(v) = patch.speed2 {
            state.speed2 = v;
        }
        if let Some(v) = patch.off {
            state.off = v;
        }
        if let Some(v) = patch.auto {
            state.auto = v;
        }
        if let Some(v) = patch.water {
            state.water = v;
        }

        state.clone()
    }
}
