//! Settings structures resolved once at process startup.
//!
//! Handlers never read the process environment at request time; each binary
//! resolves its settings struct during startup and hands the values to its
//! router state.

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listen address configuration, shared by both services
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Catalog service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub server: ServerConfig,
    /// Version label reported in every identity payload (`CATALOG_VERSION`)
    #[serde(default = "default_version")]
    pub catalog_version: String,
}

fn default_version() -> String {
    "v1".to_string()
}

/// Gateway service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewaySettings {
    #[serde(default)]
    pub server: ServerConfig,
    /// Base address of the catalog service (`CATALOG_URL`)
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    /// Maximum wait for one outbound catalog call (`UPSTREAM_TIMEOUT_MS`)
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout_ms: u64,
}

fn default_catalog_url() -> String {
    "http://catalog:8080".to_string()
}

fn default_upstream_timeout() -> u64 {
    10_000
}

fn build(path: &Path) -> Result<Config> {
    let config = Config::builder()
        .add_source(File::with_name(path.to_str().unwrap_or("config/default")).required(false))
        // Environment variables override file values; nested keys use "__",
        // e.g. SERVER__PORT=9090
        .add_source(Environment::default().separator("__").try_parsing(true))
        .build()?;
    Ok(config)
}

impl CatalogSettings {
    /// Load settings from the default configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/catalog.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: CatalogSettings = build(path.as_ref())?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }
        Ok(())
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            catalog_version: default_version(),
        }
    }
}

impl GatewaySettings {
    /// Load settings from the default configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/gateway.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: GatewaySettings = build(path.as_ref())?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }
        if self.catalog_url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Catalog URL cannot be empty".to_string(),
            )));
        }
        if self.upstream_timeout_ms == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Upstream timeout cannot be 0".to_string(),
            )));
        }
        Ok(())
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            catalog_url: default_catalog_url(),
            upstream_timeout_ms: default_upstream_timeout(),
        }
    }
}
