//! Request handlers for the gateway service

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::correlation;
use crate::gateway::response::AggregateResponse;
use crate::gateway::GatewayState;

/// Aggregate one catalog identity call into the gateway's response envelope.
///
/// Every downstream failure mode ends in a structured 502; the inbound
/// request always completes.
pub async fn aggregate(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_id = correlation::request_id(&headers);

    match state.catalog.fetch_identity(request_id).await {
        Ok(catalog) => (
            StatusCode::OK,
            Json(AggregateResponse::success(&state.pod, catalog)),
        ),
        Err(cause) => {
            warn!(error = %cause, "Catalog call failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(AggregateResponse::failure(&state.pod, &cause)),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SlowProxyQuery {
    ms: Option<String>,
}

/// Aggregate through the catalog's delay endpoint, forwarding `ms` untouched
pub async fn aggregate_slow(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<SlowProxyQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_id = correlation::request_id(&headers);

    match state
        .catalog
        .fetch_delayed(query.ms.as_deref(), request_id)
        .await
    {
        Ok(catalog) => (
            StatusCode::OK,
            Json(AggregateResponse::success(&state.pod, catalog)),
        ),
        Err(cause) => {
            warn!(error = %cause, "Delayed catalog call failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(AggregateResponse::failure(&state.pod, &cause)),
            )
        }
    }
}
