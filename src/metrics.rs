//! Request metrics registry and Prometheus text exposition.
//!
//! The registry is an explicitly constructed object injected into handlers via
//! application state rather than a process-wide global, so each test case can
//! use an isolated instance. The underlying counter and histogram cells are
//! atomic; concurrent requests increment them without lost updates.

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Per-process request metrics backed by a dedicated Prometheus registry.
pub struct Metrics {
    registry: Registry,
    /// Total requests by HTTP method and request path
    http_requests_total: IntCounterVec,
    /// Request latency distribution by request path, in seconds
    http_request_duration_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new(
                "http_requests_total",
                "Total HTTP requests by method and endpoint",
            ),
            &["method", "endpoint"],
        )?;
        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request latency in seconds by endpoint",
            ),
            &["endpoint"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    /// Record one completed request.
    pub fn observe_request(&self, method: &str, endpoint: &str, elapsed_seconds: f64) {
        self.http_requests_total
            .with_label_values(&[method, endpoint])
            .inc();
        self.http_request_duration_seconds
            .with_label_values(&[endpoint])
            .observe(elapsed_seconds);
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_renders_no_samples() {
        let metrics = Metrics::new().expect("failed to build registry");
        let body = metrics.render().expect("failed to render");
        // Vec metrics produce no output until the first labeled observation
        assert!(!body.contains("http_requests_total{"));
    }

    #[test]
    fn observed_requests_appear_in_exposition() {
        let metrics = Metrics::new().expect("failed to build registry");
        metrics.observe_request("GET", "/healthz", 0.001);
        metrics.observe_request("GET", "/healthz", 0.002);
        metrics.observe_request("GET", "/config", 0.003);

        let body = metrics.render().expect("failed to render");
        assert!(body.contains("# TYPE http_requests_total counter"));
        assert!(body.contains("# TYPE http_request_duration_seconds histogram"));

        let healthz_line = body
            .lines()
            .find(|l| l.starts_with("http_requests_total{") && l.contains("endpoint=\"/healthz\""))
            .expect("missing /healthz counter sample");
        assert!(healthz_line.contains("method=\"GET\""));
        assert!(healthz_line.ends_with(" 2"));

        assert!(body.contains("http_request_duration_seconds_count{endpoint=\"/healthz\"} 2"));
        assert!(body.contains("http_request_duration_seconds_count{endpoint=\"/config\"} 1"));
    }

    #[test]
    fn counters_are_monotonic_per_key() {
        let metrics = Metrics::new().expect("failed to build registry");
        for _ in 0..5 {
            metrics.observe_request("GET", "/", 0.0);
        }
        let body = metrics.render().expect("failed to render");
        let line = body
            .lines()
            .find(|l| l.starts_with("http_requests_total{") && l.contains("endpoint=\"/\""))
            .expect("missing counter sample");
        assert!(line.ends_with(" 5"));
    }
}
