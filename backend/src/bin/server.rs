//! numstats HTTP Server Binary
//!
//! This is the main entry point for the statistics REST API server.
//! It loads configuration, initializes logging, sets up the HTTP router, and
//! starts serving requests until interrupted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin numstats-server
//!
//! # With an explicit configuration file
//! NUMSTATS_CONFIG=/etc/numstats.toml cargo run --bin numstats-server
//! ```
//!
//! # Environment Variables
//!
//! - `NUMSTATS_CONFIG`: Path to a TOML config file (default: `./numstats.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `NUMSTATS_BODY_LIMIT`: Maximum request body in bytes (default: 1 MiB)
//! - `NUMSTATS_CORS_ORIGINS`: Extra allowed origins, comma-separated
//! - `RUST_LOG`: Log filter (falls back to `NUMSTATS_LOG`, then `info`)

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use numstats::config::ServerConfig;
use numstats::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting numstats HTTP server");

    let addr = config.socket_addr()?;
    let extra_origins = config.cors.extra_origins.len();

    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(extra_origins, "Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Keep serving; the process can still be killed.
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
