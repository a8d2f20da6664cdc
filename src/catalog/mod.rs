//! Catalog service - identity reporting and fault simulation
//!
//! The leaf service of the topology. Besides reporting who it is, it can
//! delay or fail on demand so that mesh-level timeout, retry, and outlier
//! policies have something to act on.

mod handlers;

pub use handlers::{MAX_DELAY_MS, SIMULATED_FAILURE};

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::CatalogSettings;
use crate::identity::{self, ServiceIdentity, CATALOG_SERVICE};
use crate::probes;

/// Immutable per-process state shared across catalog handlers
pub struct CatalogState {
    pub version: String,
    pub pod: String,
}

impl CatalogState {
    pub fn new(settings: &CatalogSettings) -> Self {
        Self {
            version: settings.catalog_version.clone(),
            pod: identity::pod_name(),
        }
    }

    /// Build a fresh identity payload for one response
    pub fn identity(&self) -> ServiceIdentity {
        ServiceIdentity::new(CATALOG_SERVICE, &self.version, &self.pod)
    }
}

/// Build the catalog service router
pub fn router(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .route("/api/slow", get(handlers::slow))
        .route("/api/fail", get(handlers::fail))
        .route("/healthz", get(probes::healthz))
        .route("/readyz", get(probes::readyz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
