// main.rs

mod config;
mod db;
mod error;
mod state;
mod web;

use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    // --- Report store ---
    let db = db::open(&config.db).await?;
    let state = Arc::new(AppState { db });

    // --- Webserver ---
    let app: Router = web::router(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, static_dir = %config.static_dir.display(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(%e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
}
