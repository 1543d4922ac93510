use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::catalog::SpotifyConfig;
use crate::chart::BillboardConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chart: BillboardConfig,
    #[serde(default)]
    pub catalog: SpotifyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            chart: BillboardConfig::default(),
            catalog: SpotifyConfig::default(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub chart: SanitizedChartConfig,
    pub catalog: SanitizedCatalogConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedChartConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Sanitized catalog config (client secret hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub client_id: String,
    pub client_secret_configured: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            chart: SanitizedChartConfig {
                base_url: config.chart.effective_base_url(),
                timeout_secs: config.chart.timeout_secs,
            },
            catalog: SanitizedCatalogConfig {
                client_id: config.catalog.client_id.clone(),
                client_secret_configured: !config.catalog.client_secret.is_empty(),
                base_url: config.catalog.effective_base_url(),
                timeout_secs: config.catalog.timeout_secs,
            },
        }
    }
}
