//! Prometheus metrics exposition endpoint.

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Content type for the Prometheus text exposition format.
const TEXT_FORMAT: &str = "text/plain; version=0.0.4";

/// Render all recorded counters and histograms as plain text for scrapers.
pub async fn expose(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.render()?;
    Ok(([(CONTENT_TYPE, TEXT_FORMAT)], body))
}
