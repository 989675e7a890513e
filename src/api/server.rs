//! HTTP API Server
//!
//! Binds the listener and serves the router until Ctrl-C.

use tokio::net::TcpListener;
use tracing::{info, warn};

use super::{AppState, build_router};
use crate::config::ServerConfig;
use crate::errors::Result;

/// Serves the API on the configured port until a shutdown signal arrives.
pub async fn run(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.listen_addr();
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
