//! Request handlers for the catalog service

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::debug;

use crate::catalog::CatalogState;
use crate::error::{AppError, Result};
use crate::identity::{ServiceIdentity, CATALOG_SERVICE};

/// Ceiling for the artificial delay, in milliseconds
pub const MAX_DELAY_MS: i64 = 30_000;

/// Error classification reported by the fail endpoint
pub const SIMULATED_FAILURE: &str = "simulated failure";

/// Report the service identity
pub async fn hello(State(state): State<Arc<CatalogState>>) -> Json<ServiceIdentity> {
    Json(state.identity())
}

#[derive(Debug, Deserialize)]
pub struct SlowQuery {
    ms: Option<String>,
}

/// Bound a requested delay into the allowed range.
///
/// Out-of-range values are clamped, not rejected; only missing or
/// non-integer input is a client error.
fn clamp_delay(ms: i64) -> u64 {
    ms.clamp(0, MAX_DELAY_MS) as u64
}

/// Suspend this request for the clamped duration, then report identity.
///
/// The sleep suspends only the current task; concurrent requests keep being
/// served while one caller waits.
pub async fn slow(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<SlowQuery>,
) -> Result<Json<ServiceIdentity>> {
    let raw = query
        .ms
        .ok_or_else(|| AppError::InvalidParameter("missing query parameter 'ms'".to_string()))?;
    let requested: i64 = raw.parse().map_err(|_| {
        AppError::InvalidParameter(format!("'ms' must be an integer, got '{}'", raw))
    })?;

    let delay_ms = clamp_delay(requested);
    debug!(requested, delay_ms, "Applying artificial delay");
    sleep(Duration::from_millis(delay_ms)).await;

    Ok(Json(state.identity().with_delay(delay_ms)))
}

/// Failure report returned by the fail endpoint
#[derive(Debug, Serialize)]
pub struct SimulatedFailureReport {
    pub service: String,
    pub error: String,
    pub pod: String,
    pub timestamp: DateTime<Utc>,
}

/// Unconditionally report a simulated failure with status 500
pub async fn fail(State(state): State<Arc<CatalogState>>) -> impl IntoResponse {
    let report = SimulatedFailureReport {
        service: CATALOG_SERVICE.to_string(),
        error: SIMULATED_FAILURE.to_string(),
        pod: state.pod.clone(),
        timestamp: Utc::now(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(report))
}
