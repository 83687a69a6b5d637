#![recursion_limit = "256"]

mod config;
mod routes;

use std::net::SocketAddr;

use leptos::prelude::get_configuration;

use crate::config::{ConfigError, ServerConfig};

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "skillhunter exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    let mut leptos_options = get_configuration(None)
        .map_err(|e| ServerError::Leptos(e.to_string()))?
        .leptos_options;
    leptos_options.site_addr = config.addr;
    if let Some(site_root) = config.site_root.as_deref() {
        leptos_options.site_root = site_root.into();
    }
    tracing::info!(site_root = %leptos_options.site_root, "serving bundle");

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "skillhunter listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
