//! Shared-secret verification endpoint.
//!
//! Compares a bearer token from the `Authorization` header against the
//! configured `SECRET_TOKEN` with plain equality. This is a demo path, not a
//! cryptographic one; constant-time comparison is out of scope.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// Verify the presented bearer token.
///
/// Fails with 500 when no secret is configured, 401 when the header is missing
/// or not of the form `Bearer <token>`, and 403 when the token does not match.
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let expected = state
        .config
        .secret_token
        .as_deref()
        .ok_or(AppError::SecretNotConfigured)?;

    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    if token != expected {
        return Err(AppError::Forbidden);
    }

    Ok(Json(json!({ "status": "ok", "msg": "Secret verified" })))
}
