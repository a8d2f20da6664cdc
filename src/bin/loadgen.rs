//! Continuous load generator driving the gateway.
//!
//! A plain sleep/request loop with no retries and no generated correlation
//! ids; its only purpose is to keep traffic flowing through the mesh.

use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .init();

    let target =
        std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://gateway:8080".to_string());
    let interval_ms: u64 = std::env::var("LOADGEN_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000);

    info!(%target, interval_ms, "Starting load generator");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()?;

    let url = format!("{}/api/aggregate", target.trim_end_matches('/'));

    loop {
        match client.get(&url).send().await {
            Ok(response) => info!(status = %response.status(), "aggregate"),
            Err(e) => warn!(error = %e, "Request failed"),
        }
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }
}
