//! Spotify search client.
//!
//! Performs a top-1 track search per query with a bearer token from the
//! injected credential provider. The provider's relevance ranking is
//! trusted as-is; only the first hit is ever inspected.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::credentials::CredentialProvider;
use super::types::TrackRecord;
use super::{CatalogError, TrackCatalog};

/// Artwork path served by the static front end, used when a track's album
/// carries no images.
pub const PLACEHOLDER_ARTWORK: &str = "/placeholder-artwork.svg";

/// Spotify API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyConfig {
    /// Service-level client id (or `SPOTIFY_CLIENT_ID` in the environment).
    #[serde(default)]
    pub client_id: String,
    /// Service-level client secret (or `SPOTIFY_CLIENT_SECRET`).
    #[serde(default)]
    pub client_secret: String,
    /// API base URL (default: https://api.spotify.com/v1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Token endpoint (default: https://accounts.spotify.com/api/token).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            base_url: None,
            token_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl SpotifyConfig {
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| "https://api.spotify.com/v1".to_string())
    }

    pub fn effective_token_url(&self) -> String {
        self.token_url
            .clone()
            .unwrap_or_else(|| "https://accounts.spotify.com/api/token".to_string())
    }
}

/// Spotify track search client.
pub struct SpotifyCatalogClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl SpotifyCatalogClient {
    /// Create a new Spotify client with an injected credential provider.
    pub fn new(
        config: &SpotifyConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.effective_base_url(),
            credentials,
        })
    }
}

#[async_trait]
impl TrackCatalog for SpotifyCatalogClient {
    async fn search_track(&self, query: &str) -> Result<TrackRecord, CatalogError> {
        let token = self.credentials.bearer_token().await?;
        let url = format!("{}/search", self.base_url);

        debug!("Catalog search: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(CatalogError::AuthFailed(
                "search rejected the bearer token".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("search response: {}", e)))?;

        let track = search
            .tracks
            .items
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::NoTrackFound(query.to_string()))?;

        Ok(track.into())
    }
}

// ============================================================================
// Spotify API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: TrackItems,
}

#[derive(Debug, Deserialize)]
struct TrackItems {
    #[serde(default)]
    items: Vec<ApiTrack>,
}

#[derive(Debug, Deserialize)]
struct ApiTrack {
    name: String,
    id: String,
    album: ApiAlbum,
}

#[derive(Debug, Deserialize)]
struct ApiAlbum {
    #[serde(default)]
    images: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    url: String,
}

impl From<ApiTrack> for TrackRecord {
    fn from(track: ApiTrack) -> Self {
        // First image is the largest one; tracks without artwork fall back
        // to the bundled placeholder.
        let img = track
            .album
            .images
            .into_iter()
            .next()
            .map(|i| i.url)
            .unwrap_or_else(|| PLACEHOLDER_ARTWORK.to_string());

        TrackRecord {
            name: track.name,
            id: track.id,
            img,
        }
    }
}
