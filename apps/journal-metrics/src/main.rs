//! Journal Metrics Binary
//!
//! Serves the trade metrics engine over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-metrics
//! ```
//!
//! # Environment Variables
//!
//! - `JOURNAL_CONFIG`: Path to the YAML config (default: `config.yaml` if present)
//! - `HTTP_PORT`: HTTP server port, overrides the config (default: 50051)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::path::Path;

use anyhow::Context;
use journal_metrics::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use journal_metrics::infrastructure::http::{AppState, create_router};
use journal_metrics::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = resolve_config()?;
    init_tracing(&config.observability.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        risk_free_rate = %config.metrics.risk_free_rate,
        baseline_capital = %config.metrics.baseline_capital,
        "Starting journal metrics service"
    );

    let state = AppState::new(config.metrics.calculator(), env!("CARGO_PKG_VERSION"));
    let app = create_router(state);

    let address = config.server.socket_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!(%address, "HTTP server listening");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/metrics");
    tracing::info!("  POST /api/v1/metrics/daily");
    tracing::info!("  POST /api/v1/reports/trades.csv");
    tracing::info!("  POST /api/v1/reports/summary.txt");
    tracing::info!("  POST /api/v1/reports/summary.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Journal metrics service stopped");
    Ok(())
}

/// Load the config file and apply environment overrides.
fn resolve_config() -> anyhow::Result<Config> {
    let mut config = match std::env::var("JOURNAL_CONFIG") {
        Ok(path) => load_config(Some(&path))?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None)?,
        Err(_) => Config::default(),
    };

    if let Ok(port) = std::env::var("HTTP_PORT") {
        config.server.http_port = port
            .parse()
            .with_context(|| format!("HTTP_PORT must be a port number, got '{port}'"))?;
    }

    Ok(config)
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
