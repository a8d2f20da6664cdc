//! Gateway service - downstream aggregation and fault translation
//!
//! Issues exactly one outbound catalog call per inbound request, relays the
//! trace correlation header, and collapses every kind of downstream failure
//! into one structured 502 shape. Retries, circuit breaking, and load
//! balancing are deliberately absent; the surrounding mesh owns them.

mod handlers;
mod response;
pub mod upstream;

pub use response::{AggregateOutcome, AggregateResponse, CATALOG_UNAVAILABLE};

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::GatewaySettings;
use crate::error::Result;
use crate::identity;
use crate::probes;
use upstream::CatalogClient;

/// Immutable per-process state shared across gateway handlers
pub struct GatewayState {
    pub pod: String,
    pub catalog: CatalogClient,
}

impl GatewayState {
    pub fn new(settings: &GatewaySettings) -> Result<Self> {
        Ok(Self {
            pod: identity::pod_name(),
            catalog: CatalogClient::new(settings)?,
        })
    }
}

/// Build the gateway service router
pub fn router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/api/aggregate", get(handlers::aggregate))
        .route("/api/aggregate/slow", get(handlers::aggregate_slow))
        .route("/healthz", get(probes::healthz))
        .route("/readyz", get(probes::readyz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
