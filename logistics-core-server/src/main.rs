//! `logistics-core` entry point.
//!
//! Opens the SQLite store, creates the schema when missing, and serves the
//! tracking API over HTTP until interrupted.

use anyhow::{anyhow, Context};
use clap::Parser;
use logistics_core_server::{HttpServer, Router, ServiceConfig, StaticCredentials};
use logistics_core_sqlite::repository::factory::TrackingRepoFactory;
use logistics_core_sqlite::{connect, init_database, SqliteRepositories, TrackingServiceImpl};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::parse();
    tracing::info!("logistics-core v{} starting", env!("CARGO_PKG_VERSION"));

    let pool = connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    init_database(&pool)
        .await
        .context("Failed to initialize database schema")?;
    tracing::info!("Database ready at {}", config.database_url);

    let service = TrackingServiceImpl::new(
        SqliteRepositories::new(Arc::new(pool)),
        TrackingRepoFactory::new(),
    );
    let credentials = StaticCredentials::new(&config.users);
    if credentials.is_empty() {
        tracing::warn!("No login accounts configured; every login will be rejected");
    } else {
        tracing::info!(accounts = credentials.len(), "Login accounts loaded");
    }
    let router = Router::new(Arc::new(service), Arc::new(credentials));

    let server = HttpServer::bind(&config.bind, router, tokio::runtime::Handle::current())
        .map_err(|e| anyhow!("Failed to bind {}: {e}", config.bind))?;
    tracing::info!("Listening on {}", config.bind);

    let shutdown = server.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Signal received, shutting down");
            shutdown.shutdown();
        }
    });

    tokio::task::spawn_blocking(move || server.serve())
        .await
        .context("HTTP server task failed")?;

    tracing::info!("logistics-core exiting cleanly");
    Ok(())
}
