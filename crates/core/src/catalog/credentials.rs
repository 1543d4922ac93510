//! Client-credentials token holder.
//!
//! The catalog API issues short-lived bearer tokens from a service-level
//! client id/secret pair. Tokens are cached and refreshed only when close
//! to expiry, behind a `CredentialProvider` seam so the search client can
//! be tested without a live grant endpoint.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use super::spotify::SpotifyConfig;
use super::CatalogError;

/// Refresh this long before the reported expiry.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Trait for bearer credential providers.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// A bearer token currently valid for catalog API calls.
    async fn bearer_token(&self) -> Result<String, CatalogError>;
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Client-credentials grant holder with expiry tracking.
pub struct ClientCredentials {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl ClientCredentials {
    /// Create a new credential holder from catalog configuration.
    pub fn new(config: &SpotifyConfig) -> Result<Self, CatalogError> {
        if config.client_id.is_empty() || config.client_secret.is_empty() {
            return Err(CatalogError::NotConfigured(
                "catalog client id and secret are required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            token_url: config.effective_token_url(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            cached: Mutex::new(None),
        })
    }

    async fn grant(&self) -> Result<CachedToken, CatalogError> {
        let credentials = format!("{}:{}", self.client_id, self.client_secret);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);

        debug!("Requesting client-credentials token");

        let response = self
            .client
            .post(&self.token_url)
            .header("Authorization", format!("Basic {}", encoded))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::AuthFailed(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("token response: {}", e)))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(REFRESH_MARGIN);

        Ok(CachedToken {
            token: token.access_token,
            expires_at: Instant::now() + lifetime,
        })
    }
}

#[async_trait]
impl CredentialProvider for ClientCredentials {
    async fn bearer_token(&self) -> Result<String, CatalogError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
            debug!("Cached catalog token expired, refreshing");
        }

        let fresh = self.grant().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_token_expiry() {
        let live = CachedToken {
            token: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(60),
        };
        assert!(!live.is_expired());

        let expired = CachedToken {
            token: "t".to_string(),
            expires_at: Instant::now(),
        };
        assert!(expired.is_expired());
    }

    #[test]
    fn test_token_response_default_expiry() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert_eq!(parsed.expires_in, 3600);

        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token": "abc", "expires_in": 120}"#).unwrap();
        assert_eq!(parsed.expires_in, 120);
    }

    #[test]
    fn test_new_requires_credentials() {
        let config = SpotifyConfig::default();
        let result = ClientCredentials::new(&config);
        assert!(matches!(result, Err(CatalogError::NotConfigured(_))));
    }
}
