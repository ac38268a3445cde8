//! Non-sensitive configuration echo.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Exposes the display message, version, and whether a secret is configured.
/// The secret value itself is never returned, only its presence.
pub async fn show(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": state.config.message,
        "version": state.config.version,
        "has_secret": state.config.has_secret(),
    }))
}
