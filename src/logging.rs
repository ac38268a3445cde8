//! Process-wide tracing initialization.
//!
//! Installs a single subscriber before the server accepts traffic. All log
//! output, including tower-http request traces, flows through the same
//! formatter; there is no default handler left to duplicate records.
//! Timestamps are rendered at second precision.

use time::macros::format_description;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Initialize the global subscriber. Must be called exactly once, at startup.
pub fn init(filter: &str, format: LogFormat) {
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
    ));
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_timer(timer))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_timer(timer))
            .init(),
    }
}
