//! Main entry point for the catalog (backend) service

use std::sync::Arc;

use mesh_demo::{catalog, config::CatalogSettings};
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

    info!("Starting catalog service");

    // Load configuration
    let settings = CatalogSettings::load()?;
    settings.validate()?;
    info!(
        version = %settings.catalog_version,
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    let state = Arc::new(catalog::CatalogState::new(&settings));
    info!(pod = %state.pod, "Resolved pod identity");

    // Build the router
    let app = catalog::router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Catalog listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
