//! Operator console page

use axum::{extract::State, response::Html};

use crate::broker::AppState;
use crate::error::AppError;

const CONSOLE_HTML: &str = include_str!("../../../static/console.html");

/// GET / - Serve the embedded operator console
pub async fn console_page(State(state): State<AppState>) -> Result<Html<&'static str>, AppError> {
    if !state.console_enabled {
        return Err(AppError::NotFound("Operator console is disabled".to_string()));
    }
    Ok(Html(CONSOLE_HTML))
}
