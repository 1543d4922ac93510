use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides.
///
/// The file is optional; with no file present the service runs on defaults
/// plus environment variables, matching a credentials-only deployment.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CHARTDAY_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(with_env_credentials(config))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Fill in catalog credentials from the conventional Spotify environment
/// variables when the config file leaves them empty.
fn with_env_credentials(mut config: Config) -> Config {
    if config.catalog.client_id.is_empty() {
        if let Ok(id) = std::env::var("SPOTIFY_CLIENT_ID") {
            config.catalog.client_id = id;
        }
    }
    if config.catalog.client_secret.is_empty() {
        if let Ok(secret) = std::env::var("SPOTIFY_CLIENT_SECRET") {
            config.catalog.client_secret = secret;
        }
    }
    config
}
