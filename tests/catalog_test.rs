//! Functional tests for the catalog service endpoints

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use mesh_demo::catalog::{self, CatalogState, MAX_DELAY_MS, SIMULATED_FAILURE};
use mesh_demo::config::CatalogSettings;

fn test_app(version: &str) -> Router {
    let settings = CatalogSettings {
        catalog_version: version.to_string(),
        ..CatalogSettings::default()
    };
    catalog::router(Arc::new(CatalogState::new(&settings)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_hello_reports_identity() {
    let (status, body) = get_json(test_app("v7"), "/api/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "catalog");
    assert_eq!(body["version"], "v7");
    assert!(!body["pod"].as_str().unwrap().is_empty());
    assert!(body.get("delayed").is_none());

    // Timestamp must be ISO-8601 UTC
    let timestamp = body["timestamp"].as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
}

#[tokio::test]
async fn test_hello_version_stable_across_calls() {
    let app = test_app("v2");

    let (_, first) = get_json(app.clone(), "/api/hello").await;
    let (_, second) = get_json(app, "/api/hello").await;

    assert_eq!(first["version"], "v2");
    assert_eq!(second["version"], "v2");
    assert_eq!(first["pod"], second["pod"]);
}

#[tokio::test]
async fn test_slow_applies_requested_delay() {
    let app = test_app("v1");

    let started = Instant::now();
    let (status, body) = get_json(app, "/api/slow?ms=120").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delayed"], 120);
    assert!(started.elapsed() >= Duration::from_millis(120));
}

#[tokio::test]
async fn test_slow_clamps_negative_delay_to_zero() {
    let (status, body) = get_json(test_app("v1"), "/api/slow?ms=-500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delayed"], 0);
}

// The paused clock auto-advances through the 30s sleep, so the ceiling case
// stays fast while still exercising the real handler.
#[tokio::test(start_paused = true)]
async fn test_slow_clamps_excessive_delay_to_ceiling() {
    let (status, body) = get_json(test_app("v1"), "/api/slow?ms=90000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delayed"], MAX_DELAY_MS);
}

#[tokio::test]
async fn test_slow_rejects_non_integer_delay() {
    let (status, body) = get_json(test_app("v1"), "/api/slow?ms=soon").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn test_slow_rejects_missing_delay() {
    let (status, _) = get_json(test_app("v1"), "/api/slow").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fail_always_reports_simulated_failure() {
    let app = test_app("v1");

    for _ in 0..3 {
        let (status, body) = get_json(app.clone(), "/api/fail").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["service"], "catalog");
        assert_eq!(body["error"], SIMULATED_FAILURE);
        assert!(!body["pod"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_probes_always_succeed() {
    let app = test_app("v1");

    for uri in ["/healthz", "/readyz"] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }
}
