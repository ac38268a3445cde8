//! Service identity endpoint.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::config::SERVICE_NAME;
use crate::state::AppState;

/// Root handler: reports the service name and configured version.
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": state.config.version,
    }))
}
