//! Request-scoped service identity payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service name reported by the catalog service
pub const CATALOG_SERVICE: &str = "catalog";

/// Service name reported by the gateway service
pub const GATEWAY_SERVICE: &str = "gateway";

/// Identity of a service instance, built fresh per request.
///
/// `version` and `pod` are resolved once at process startup and never change
/// for the process lifetime; `timestamp` is taken at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceIdentity {
    pub service: String,
    pub version: String,
    pub pod: String,
    pub timestamp: DateTime<Utc>,
    /// Clamped artificial delay actually applied, present only on delayed responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delayed: Option<u64>,
}

impl ServiceIdentity {
    pub fn new(service: &str, version: &str, pod: &str) -> Self {
        Self {
            service: service.to_string(),
            version: version.to_string(),
            pod: pod.to_string(),
            timestamp: Utc::now(),
            delayed: None,
        }
    }

    /// Attach the clamped delay that was applied to this response
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delayed = Some(delay_ms);
        self
    }
}

/// Resolve the pod identifier from the runtime host/container name.
///
/// Kubernetes injects the pod name as `HOSTNAME`; outside a cluster the
/// variable is usually the machine hostname.
pub fn pod_name() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_omits_delay_by_default() {
        let identity = ServiceIdentity::new(CATALOG_SERVICE, "v1", "pod-1");
        let value = serde_json::to_value(&identity).unwrap();

        assert_eq!(value["service"], "catalog");
        assert_eq!(value["version"], "v1");
        assert_eq!(value["pod"], "pod-1");
        assert!(value.get("delayed").is_none());
    }

    #[test]
    fn test_identity_with_delay() {
        let identity = ServiceIdentity::new(CATALOG_SERVICE, "v1", "pod-1").with_delay(250);
        let value = serde_json::to_value(&identity).unwrap();

        assert_eq!(value["delayed"], 250);
    }

    #[test]
    fn test_identity_round_trip() {
        let identity = ServiceIdentity::new(GATEWAY_SERVICE, "v2", "pod-2");
        let json = serde_json::to_string(&identity).unwrap();
        let parsed: ServiceIdentity = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.service, identity.service);
        assert_eq!(parsed.timestamp, identity.timestamp);
        assert!(parsed.delayed.is_none());
    }
}
