//! Deployment-validation sample app entry point.

use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sample_app::api;
use sample_app::config::Config;
use sample_app::utils::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration once; it is immutable for the process lifetime
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // A bind failure is fatal: log it and exit non-zero.
    api::serve(&config, shutdown_signal()).await.map_err(|e| {
        error!("Failed to serve on port {}: {}", config.port, e);
        e
    })?;

    Ok(())
}
