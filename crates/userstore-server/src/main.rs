//! userstore-server - HTTP front end for the user store.
//!
//! Routes map one-to-one onto [`UserStore`](userstore_core::UserStore)
//! operations; all state lives in the configured collection file.

mod config;
mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use userstore_file::FileUserStore;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting userstore server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!(
        bind = %config.bind_address,
        store = %config.store.path.display(),
        pretty = config.store.pretty,
        timeout_secs = config.request_timeout.as_secs(),
        "Configuration loaded"
    );

    let store = Arc::new(FileUserStore::new(config.store.clone()));
    let app = routes::router(store, config.request_timeout);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
