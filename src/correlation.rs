//! Relay of the trace correlation header across the gateway hop.
//!
//! The mesh's tracing layer stitches spans together from `x-request-id`; the
//! application's only job is to copy the inbound value, byte for byte, onto
//! the one outbound call it makes. The header is never generated here.

use axum::http::{HeaderMap, HeaderValue};

/// Header carrying the caller-supplied correlation identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extract the correlation header from an inbound request, if present
pub fn request_id(headers: &HeaderMap) -> Option<&HeaderValue> {
    headers.get(REQUEST_ID_HEADER)
}

/// Attach the correlation value verbatim to an outbound request
pub fn propagate(
    builder: reqwest::RequestBuilder,
    request_id: Option<&HeaderValue>,
) -> reqwest::RequestBuilder {
    match request_id {
        Some(value) => builder.header(REQUEST_ID_HEADER, value.as_bytes()),
        None => builder,
    }
}
