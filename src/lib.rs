//! k8s-demo-service: a minimal Kubernetes demonstration HTTP service.
//!
//! Illustrates the usual orchestration-adjacent concerns: a liveness probe,
//! configuration from environment variables, a secret-gated endpoint,
//! structured logging, Prometheus metrics exposition, and a CPU-burn endpoint
//! for autoscaling demos.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;
