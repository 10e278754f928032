//! Control handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{Map, Value};

use crate::broker::{AppState, CommandIngress};
use crate::error::AppError;

use super::AppJson;

/// POST /api/control - Merge an operator command into the control state
pub async fn update_control(
    State(state): State<AppState>,
    AppJson(body): AppJson<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let command = CommandIngress::parse(body)?;
    state.ingress.apply(command).await;

    Ok(StatusCode::OK)
}

/// GET /api/control - Device fetch of the current control state (heartbeat)
pub async fn get_control(State(state): State<AppState>) -> impl IntoResponse {
    let gap = state.liveness.touch().await;
    let threshold = state.status.threshold();

    match gap {
        None => tracing::info!("Device connected (first state fetch)"),
        Some(gap) if gap >= threshold => {
            tracing::info!("Device reconnected after {} ms of silence", gap.as_millis())
        }
        Some(_) => {}
    }

    Json(state.store.get().await)
}
