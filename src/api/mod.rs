//! API module - HTTP handlers and routes

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::broker::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Operator console
        .route("/", get(handlers::console_page))
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::health_check))
        // Control state: console posts, device polls
        .route(
            "/api/control",
            post(handlers::update_control).get(handlers::get_control),
        )
        // Device connectivity
        .route("/api/status", get(handlers::get_status))
}

/// Full application with state and middleware applied
pub fn app(state: AppState) -> Router {
    routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
