//! Status handlers

use axum::{extract::State, response::IntoResponse, Json};

use crate::broker::AppState;

/// GET /api/status - Device connectivity for the operator console
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.status.evaluate().await)
}
