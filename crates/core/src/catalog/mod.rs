//! Music catalog integration.
//!
//! This module provides the `TrackCatalog` trait for resolving a free-text
//! query to a playable track, a Spotify search backend, and the
//! `CredentialProvider` seam for the client-credentials token grant.

mod credentials;
mod spotify;
mod types;

pub use credentials::{ClientCredentials, CredentialProvider};
pub use spotify::{SpotifyCatalogClient, SpotifyConfig, PLACEHOLDER_ARTWORK};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when interacting with the music catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Credential grant was rejected.
    #[error("Catalog authentication failed: {0}")]
    AuthFailed(String),

    /// API returned an error.
    #[error("Catalog API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse a response.
    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    /// The search returned zero results.
    #[error("No track found for query: {0}")]
    NoTrackFound(String),

    /// Client not configured (missing credentials, etc.).
    #[error("Catalog client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for music catalog clients.
///
/// A catalog resolves a free-text query to the single most relevant track;
/// the provider's relevance ranking is trusted as-is.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    /// Search for the top track matching `query`.
    async fn search_track(&self, query: &str) -> Result<TrackRecord, CatalogError>;
}
