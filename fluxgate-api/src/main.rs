//! Fluxgate API - InfluxDB line-protocol relay with health probes
//!
//! Architecture:
//! - Axum HTTP server accepts raw line-protocol payloads
//! - Each payload is forwarded verbatim to InfluxDB's v2 write API
//! - Readiness is derived from InfluxDB's own health endpoint
//!
//! # Usage
//!
//! ```bash
//! # Point at a running InfluxDB and start
//! INFLUXDB_URL=http://localhost:8086 cargo run --bin fluxgate-api
//! ```

mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fluxgate_common::{Config, InfluxClient};

use crate::routes::{health, ready, root, write_line_protocol, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Setup logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .init();
    }

    info!("Starting Fluxgate API v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // Create app state
    let state = AppState {
        influx: InfluxClient::new(&config),
    };

    // Build router
    let app = Router::new()
        // Service descriptor
        .route("/", get(root))
        // Health checks
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Line-protocol relay
        .route("/write-line-protocol", post(write_line_protocol))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
