//! Application error taxonomy and the single response-translation point.
//!
//! Handlers return `Result<_, AppError>`; every variant maps to a status code
//! and a JSON body of the form `{"detail": <message>}` here, so no handler
//! builds error responses ad hoc.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `/secret-check` was called but no `SECRET_TOKEN` is configured (500)
    #[error("SECRET_TOKEN is not configured on the server")]
    SecretNotConfigured,

    /// `Authorization` header missing or not of the form `Bearer <token>` (401)
    #[error("Missing or malformed Authorization header (expected 'Bearer <token>')")]
    Unauthorized,

    /// Presented bearer token does not match the configured secret (403)
    #[error("Invalid secret token")]
    Forbidden,

    /// Query string failed to deserialize (400)
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Metrics registry failed to encode (500)
    #[error("Failed to encode metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::SecretNotConfigured | AppError::Metrics(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_status_codes() {
        assert_eq!(
            AppError::SecretNotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::InvalidQuery("seconds".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn responses_carry_json_detail() {
        let response = AppError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));
    }
}
