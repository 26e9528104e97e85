mod config;
mod errors;
mod middleware;
mod routes;
mod state;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume review API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState {
        config: config.clone(),
    };

    // The gateway fronts a browser client served from another origin.
    let app = build_router(state).layer(CorsLayer::permissive());

    // Hostname, not address: resolution happens in bind.
    let listener =
        tokio::net::TcpListener::bind((config.hostname.as_str(), config.port)).await?;
    info!("Server running on {}:{}", config.hostname, config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
