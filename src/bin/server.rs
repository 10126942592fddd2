//! chakra-profile HTTP server binary.
//!
//! # Environment Variables
//!
//! - `HOST`: bind address (default: 0.0.0.0)
//! - `PORT`: HTTP port (default: 8080)
//! - `PROFILE_STORE`: storage backend: "memory" (default) or "sqlite"
//! - `PROFILE_DB_PATH`: SQLite database file (default: platform data dir)
//! - `RUST_LOG`: tracing filter (default: "info,chakra_profile=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! PROFILE_STORE=sqlite cargo run --bin server
//! ```

use anyhow::Context;
use chakra_profile::server::{app_router, AppState};
use chakra_profile::storage::open_store;
use chakra_profile::utilities::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chakra_profile=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let store = open_store(&config).context("failed to open profile store")?;
    let app = app_router(AppState::with_store(store));

    let bind_addr = config.bind_addr();
    tracing::info!("chakra-profile server starting on {}", bind_addr);
    tracing::info!("Store backend: {:?}", config.store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
