//! CPU burn endpoint for autoscaling demonstrations.
//!
//! Busy-spins the serving thread until the requested wall-clock duration has
//! elapsed, checking the clock each iteration rather than sleeping. This
//! intentionally consumes CPU without yielding: under a saturated runtime it
//! stalls other requests for the duration, which is the point of a
//! load-generation endpoint, not a defect. `seconds` is unbounded.

use axum::extract::{rejection::QueryRejection, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct BurnParams {
    #[serde(default = "BurnParams::default_seconds")]
    pub seconds: f64,
}

impl BurnParams {
    fn default_seconds() -> f64 {
        0.5
    }
}

/// Spin until `seconds` of wall-clock time have elapsed, counting iterations.
///
/// Negative or NaN durations complete immediately with zero iterations.
fn busy_spin(seconds: f64) -> u64 {
    let start = Instant::now();
    let mut iterations: u64 = 0;
    while start.elapsed().as_secs_f64() < seconds {
        iterations += 1;
    }
    iterations
}

/// Burn handler. Malformed `seconds` surfaces as a 400 validation error.
pub async fn burn(
    params: Result<Query<BurnParams>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;

    let iterations = busy_spin(params.seconds);

    Ok(Json(json!({
        "burn_seconds": params.seconds,
        "iterations": iterations,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_holds_for_requested_duration() {
        let start = Instant::now();
        let iterations = busy_spin(0.02);
        assert!(start.elapsed().as_secs_f64() >= 0.02);
        assert!(iterations > 0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        assert_eq!(busy_spin(0.0), 0);
    }

    #[test]
    fn negative_duration_completes_immediately() {
        assert_eq!(busy_spin(-1.0), 0);
    }

    #[test]
    fn nan_duration_completes_immediately() {
        assert_eq!(busy_spin(f64::NAN), 0);
    }
}
