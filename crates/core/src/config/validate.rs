use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog credentials are present
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Catalog credentials are required for every cache miss
    if config.catalog.client_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.client_id is not set (or SPOTIFY_CLIENT_ID in the environment)".to_string(),
        ));
    }
    if config.catalog.client_secret.is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.client_secret is not set (or SPOTIFY_CLIENT_SECRET in the environment)"
                .to_string(),
        ));
    }

    Ok(())
}
