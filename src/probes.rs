//! Liveness and readiness probe handlers shared by both services.
//!
//! Probes answer for the process itself, never for downstream reachability;
//! the gateway stays ready while the catalog is down.

pub async fn healthz() -> &'static str {
    "OK"
}

pub async fn readyz() -> &'static str {
    "OK"
}
