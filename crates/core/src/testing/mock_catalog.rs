//! Mock track catalog for testing.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, TrackCatalog, TrackRecord};

/// Mock implementation of the `TrackCatalog` trait.
///
/// Tracks are keyed by exact query string; unknown queries fail with
/// `NoTrackFound`, matching a zero-result search. Searches are recorded so
/// tests can assert that cache hits issue no outbound calls, and an
/// optional delay widens the window for concurrent-miss scenarios.
#[derive(Debug, Default)]
pub struct MockTrackCatalog {
    tracks: RwLock<HashMap<String, TrackRecord>>,
    searched: RwLock<Vec<String>>,
    next_error: RwLock<Option<CatalogError>>,
    search_delay: RwLock<Option<Duration>>,
}

impl MockTrackCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the record returned for an exact query string.
    pub async fn add_track(&self, query: &str, record: TrackRecord) {
        self.tracks.write().await.insert(query.to_string(), record);
    }

    /// Queries searched so far, in order.
    pub async fn searched_queries(&self) -> Vec<String> {
        self.searched.read().await.clone()
    }

    /// Number of searches performed.
    pub async fn search_count(&self) -> usize {
        self.searched.read().await.len()
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Delay every search, forcing concurrent callers to interleave.
    pub async fn set_search_delay(&self, delay: Duration) {
        *self.search_delay.write().await = Some(delay);
    }
}

#[async_trait]
impl TrackCatalog for MockTrackCatalog {
    async fn search_track(&self, query: &str) -> Result<TrackRecord, CatalogError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.searched.write().await.push(query.to_string());

        if let Some(delay) = *self.search_delay.read().await {
            tokio::time::sleep(delay).await;
        }

        self.tracks
            .read()
            .await
            .get(query)
            .cloned()
            .ok_or_else(|| CatalogError::NoTrackFound(query.to_string()))
    }
}
