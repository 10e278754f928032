//! Command ingress - normalizes operator commands and merges them into the store

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::{ControlCommand, ControlPatch, ControlState};

use super::store::ControlStateStore;

/// Round a wire axis value to the nearest integer (half away from zero).
/// Out-of-range results saturate; clamping happens in the store.
fn normalize_axis(value: f64) -> i64 {
    value.round() as i64
}

impl From<ControlCommand> for ControlPatch {
    fn from(cmd: ControlCommand) -> Self {
        Self {
            speed: cmd.speed.map(normalize_axis),
            steering: cmd.steering.map(normalize_axis),
            speed1: cmd.speed1,
            speed2: cmd.speed2,
            off: cmd.off,
            auto: cmd.auto,
            water: cmd.water,
        }
    }
}

#[derive(Clone)]
pub struct CommandIngress {
    store: Arc<ControlStateStore>,
}

impl CommandIngress {
    pub fn new(store: Arc<ControlStateStore>) -> Self {
        Self { store }
    }

    /// Decode a JSON object body into a command
    pub fn parse(body: Map<String, Value>) -> Result<ControlCommand, AppError> {
        ControlCommand::from_object(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid control command: {}", e)))
    }

    /// Forward exactly the supplied fields to the store
    pub async fn apply(&self, command: ControlCommand) -> ControlState {
        let patch = ControlPatch::from(command);

        if patch.is_empty() {
            tracing::debug!("Control command carried no recognised fields");
            return self.store.get().await;
        }

        let fields = patch.supplied_fields();
        let state = self.store.merge(patch).await;
        tracing::debug!(
            fields = ?fields,
            speed = state.speed,
            steering = state.steering,
            "Control state updated"
        );
        state
    }
}
