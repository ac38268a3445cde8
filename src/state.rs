//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the immutable configuration snapshot and the request metrics
/// registry. Both are constructed once at startup and injected here, so tests
/// can build isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Creates a new application state from the given configuration and metrics registry.
    pub fn new(config: AppConfig, metrics: Metrics) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(metrics),
        }
    }
}
