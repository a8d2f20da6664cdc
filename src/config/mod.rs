//! Startup configuration for both services

pub mod settings;

pub use settings::{CatalogSettings, GatewaySettings, ServerConfig};
