//! HTTP route handlers.
//!
//! One module per handler group, registered in a single explicit route table
//! in [`create_router`]. Request observability (request-id span, metrics,
//! `X-Process-Time`) is applied as the outermost layer so it covers every
//! route, error responses, and unmatched-path 404s alike.

pub mod burn;
pub mod config;
pub mod health;
pub mod info;
pub mod metrics;
pub mod secret;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::observe_request_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and observability layers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(info::root))
        .route("/healthz", get(health::healthz))
        .route("/burn", get(burn::burn))
        .route("/config", get(config::show))
        .route("/secret-check", get(secret::check))
        .route("/metrics", get(metrics::expose))
        .with_state(state.clone())
        // HTTP-level traces go through the same subscriber as application logs
        .layer(TraceLayer::new_for_http())
        // Outermost layer: request span, metrics, X-Process-Time
        .layer(middleware::from_fn_with_state(state, observe_request_layer))
}
