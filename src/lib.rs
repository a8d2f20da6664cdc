//! Mesh demo services
//!
//! A minimal two-service HTTP topology (an aggregating gateway and a leaf
//! "catalog" service) used to exercise a service mesh's traffic-management,
//! security, and observability features. The services deliberately carry no
//! retries, circuit breaking, or load balancing so that the mesh layer's
//! equivalents are observable in isolation.

pub mod catalog;
pub mod config;
pub mod correlation;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod probes;

pub use error::{AppError, Result};
