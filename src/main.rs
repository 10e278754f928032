//! rc-control-broker - Control state broker for a polling RC device
//!
//! Relays operator commands from the browser console to the device, and
//! reports whether the device is still polling.

mod api;
mod broker;
mod config;
mod error;
mod models;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::broker::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rc_control_broker=info,tower_http=debug".into()),
        )
        .init();

    tracing::info!("Starting rc-control-broker...");

    // Load configuration
    let config = config::Config::load()?;
    tracing::info!(
        "Configuration loaded (liveness threshold {} ms, console {})",
        config.liveness.threshold_ms,
        if config.console.enabled { "enabled" } else { "disabled" }
    );

    let app_state = AppState::new(&config);
    let app = api::app(app_state);

    // Start server
    let addr = config.server.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
