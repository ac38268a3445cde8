//! Application entry point. It initializes tracing, snapshots configuration
//! from the environment, builds the metrics registry, sets up the Axum router
//! with all routes, and starts the HTTP server.

use std::net::SocketAddr;

use clap::Parser;

use k8s_demo_service::config::{AppConfig, DEFAULT_LOG_FILTER};
use k8s_demo_service::logging;
use k8s_demo_service::metrics::Metrics;
use k8s_demo_service::routes::create_router;
use k8s_demo_service::shutdown::shutdown_signal;
use k8s_demo_service::state::AppState;

/// Kubernetes demo HTTP service
#[derive(Parser, Debug)]
#[command(name = "k8s-demo-service", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Log level filter (e.g., "k8s_demo_service=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration snapshot; never fails, every value has a default or is optional
    let config = AppConfig::from_env();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    logging::init(&log_filter, config.log_format);

    tracing::info!(
        version = %config.version,
        has_secret = config.has_secret(),
        "Loaded configuration"
    );

    // Metrics registry, injected into the router via application state
    let metrics = Metrics::new()?;

    let state = AppState::new(config, metrics);
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
