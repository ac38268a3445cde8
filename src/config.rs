//! Configuration loading and constants.
//!
//! The configuration is a snapshot of a handful of environment variables taken
//! once at process start. Every value either has a fixed default or is
//! optional, so loading never fails: the service starts and serves health
//! checks even with nothing configured. The snapshot is immutable afterwards.

use std::env;

/// Service identity reported by `GET /`. The demo's Kubernetes manifests
/// reference this name, so it is kept as-is.
pub const SERVICE_NAME: &str = "fastapi-k8s-demo";

/// Default version string when `APP_VERSION` is not set.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Default display message when `APP_MESSAGE` is not set.
pub const DEFAULT_MESSAGE: &str = "Hello from ConfigMap 👋";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "k8s_demo_service=debug,tower_http=debug";

// Environment variable names
pub const ENV_VERSION: &str = "APP_VERSION";
pub const ENV_MESSAGE: &str = "APP_MESSAGE";
pub const ENV_SECRET_TOKEN: &str = "SECRET_TOKEN";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Log output format, selected via `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line records (default)
    #[default]
    Text,
    /// Structured JSON records
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. Unrecognized values fall back to text.
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Immutable configuration snapshot, taken once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Version string reported by `/` and `/config`
    pub version: String,
    /// Display message exposed via `/config` (typically from a ConfigMap)
    pub message: String,
    /// Shared secret for `/secret-check`. Absence is a valid state: the
    /// endpoint then reports the server as misconfigured.
    pub secret_token: Option<String>,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup. Lets tests construct
    /// configurations without mutating process-wide environment state.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            version: get(ENV_VERSION).unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            message: get(ENV_MESSAGE).unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            secret_token: get(ENV_SECRET_TOKEN),
            log_format: LogFormat::parse(get(ENV_LOG_FORMAT).as_deref()),
        }
    }

    /// Whether a shared secret was configured at startup.
    pub fn has_secret(&self) -> bool {
        self.secret_token.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.version, DEFAULT_VERSION);
        assert_eq!(config.message, DEFAULT_MESSAGE);
        assert!(!config.has_secret());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn configured_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_VERSION, "1.2.3"),
            (ENV_MESSAGE, "hello"),
            (ENV_SECRET_TOKEN, "s3cr3t"),
        ]));
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.message, "hello");
        assert_eq!(config.secret_token.as_deref(), Some("s3cr3t"));
        assert!(config.has_secret());
    }

    #[test]
    fn log_format_parses_json_case_insensitively() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "JSON")]));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unknown_log_format_falls_back_to_text() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "yaml")]));
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
