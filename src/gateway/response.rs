//! Wire shape of the gateway's aggregation responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gateway::upstream::UpstreamError;
use crate::identity::{ServiceIdentity, GATEWAY_SERVICE};

/// Error classification reported whenever the catalog call fails
pub const CATALOG_UNAVAILABLE: &str = "catalog unavailable";

/// Response envelope for the aggregation endpoints.
///
/// Carries exactly one of a nested catalog payload or an error
/// classification; the outcome enum makes both-or-neither unrepresentable.
#[derive(Debug, Serialize, Deserialize)]
pub struct AggregateResponse {
    pub service: String,
    pub pod: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: AggregateOutcome,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AggregateOutcome {
    Success { catalog: ServiceIdentity },
    Failure { error: String, detail: String },
}

impl AggregateResponse {
    pub fn success(pod: &str, catalog: ServiceIdentity) -> Self {
        Self {
            service: GATEWAY_SERVICE.to_string(),
            pod: pod.to_string(),
            timestamp: Utc::now(),
            outcome: AggregateOutcome::Success { catalog },
        }
    }

    pub fn failure(pod: &str, cause: &UpstreamError) -> Self {
        Self {
            service: GATEWAY_SERVICE.to_string(),
            pod: pod.to_string(),
            timestamp: Utc::now(),
            outcome: AggregateOutcome::Failure {
                error: CATALOG_UNAVAILABLE.to_string(),
                detail: cause.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::CATALOG_SERVICE;

    #[test]
    fn test_success_shape_carries_catalog_only() {
        let catalog = ServiceIdentity::new(CATALOG_SERVICE, "v1", "catalog-abc");
        let value =
            serde_json::to_value(AggregateResponse::success("gateway-xyz", catalog)).unwrap();

        assert_eq!(value["service"], "gateway");
        assert_eq!(value["pod"], "gateway-xyz");
        assert_eq!(value["catalog"]["service"], "catalog");
        assert!(value.get("error").is_none());
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn test_failure_shape_carries_error_only() {
        let cause = UpstreamError::Timeout(10_000);
        let value =
            serde_json::to_value(AggregateResponse::failure("gateway-xyz", &cause)).unwrap();

        assert_eq!(value["error"], CATALOG_UNAVAILABLE);
        assert!(!value["detail"].as_str().unwrap().is_empty());
        assert!(value.get("catalog").is_none());
    }
}
