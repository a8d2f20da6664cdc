//! Outbound HTTP client for the catalog service.
//!
//! One pooled client, one base address, one fixed timeout. Failures come
//! back as a classified [`UpstreamError`] so the HTTP layer's translation to
//! a 502 is a plain mapping instead of exception interception. The caller's
//! correlation header is relayed on every request; nothing is retried.

use std::time::Duration;

use axum::http::HeaderValue;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::GatewaySettings;
use crate::correlation;
use crate::error::{AppError, Result};
use crate::identity::ServiceIdentity;

/// Classified failure of one outbound catalog call
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("connection to catalog failed: {0}")]
    Connect(String),

    #[error("catalog did not respond within {0}ms")]
    Timeout(u64),

    #[error("catalog returned status {status}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode catalog response: {0}")]
    Decode(String),
}

pub type UpstreamResult<T> = std::result::Result<T, UpstreamError>;

/// Connection-pooled client bound to the configured catalog base address
pub struct CatalogClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl CatalogClient {
    pub fn new(settings: &GatewaySettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.upstream_timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.catalog_url.trim_end_matches('/').to_string(),
            timeout_ms: settings.upstream_timeout_ms,
        })
    }

    /// Fetch the catalog's identity
    pub async fn fetch_identity(
        &self,
        request_id: Option<&HeaderValue>,
    ) -> UpstreamResult<ServiceIdentity> {
        let url = format!("{}/api/hello", self.base_url);
        debug!(%url, "Fetching catalog identity");

        let request = correlation::propagate(self.client.get(&url), request_id);
        self.dispatch(request).await
    }

    /// Fetch the catalog's identity through its delay endpoint.
    ///
    /// The `ms` value is forwarded verbatim; validating and clamping it is
    /// the catalog's job, and a catalog-side rejection surfaces here as a
    /// non-success status.
    pub async fn fetch_delayed(
        &self,
        ms: Option<&str>,
        request_id: Option<&HeaderValue>,
    ) -> UpstreamResult<ServiceIdentity> {
        let url = format!("{}/api/slow", self.base_url);
        debug!(%url, ms, "Fetching delayed catalog identity");

        let mut request = self.client.get(&url);
        if let Some(ms) = ms {
            request = request.query(&[("ms", ms)]);
        }
        self.dispatch(correlation::propagate(request, request_id)).await
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder) -> UpstreamResult<ServiceIdentity> {
        let response = request.send().await.map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        response
            .json::<ServiceIdentity>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    fn classify(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout_ms)
        } else {
            UpstreamError::Connect(err.to_string())
        }
    }
}
