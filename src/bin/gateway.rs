//! Main entry point for the gateway service

use std::sync::Arc;

use mesh_demo::{config::GatewaySettings, gateway};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .init();

    info!("Starting gateway service");

    // Load configuration
    let settings = GatewaySettings::load()?;
    settings.validate()?;
    info!(
        catalog_url = %settings.catalog_url,
        upstream_timeout_ms = settings.upstream_timeout_ms,
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    let state = Arc::new(gateway::GatewayState::new(&settings)?);
    info!(pod = %state.pod, "Resolved pod identity");

    // Build the router
    let app = gateway::router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Gateway listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
