//! Request observability middleware.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the entire request lifecycle, so all logs emitted during request
//! processing carry the request_id field for correlation. On completion it
//! records the request in the metrics registry and stamps the response with an
//! `X-Process-Time` header carrying the elapsed wall-clock seconds.
//!
//! This runs for every request regardless of which handler matched, including
//! error responses and unmatched-route 404s.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

/// Response header carrying elapsed processing time in seconds.
pub const X_PROCESS_TIME: HeaderName = HeaderName::from_static("x-process-time");

/// Middleware that times the request, records metrics, and creates a request span.
///
/// This should be the outermost middleware layer so the measured duration and
/// the span cover all request processing, including other middleware and handlers.
pub async fn observe_request_layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // Create the request span with key fields for correlation
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    // Process the request within the span
    async move {
        let mut response = next.run(request).await;
        let elapsed = start.elapsed().as_secs_f64();

        state.metrics.observe_request(method.as_str(), &path, elapsed);

        // Elapsed seconds, rounded to four decimal places
        if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.4}")) {
            response.headers_mut().insert(X_PROCESS_TIME, value);
        }

        let duration_ms = (elapsed * 1000.0) as u64;
        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
