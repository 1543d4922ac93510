//! Track resolution cache.
//!
//! Resolved tracks are memoized for the lifetime of the process: unbounded,
//! no TTL, no eviction, no persistence. Keys are the verbatim query strings;
//! no normalization is applied, so case-variant queries are distinct entries.

mod memory;

pub use memory::MemoryTrackCache;

use async_trait::async_trait;

use crate::catalog::TrackRecord;

/// Trait for track caches.
#[async_trait]
pub trait TrackCache: Send + Sync {
    /// Look up a record by its exact query key.
    async fn get(&self, key: &str) -> Option<TrackRecord>;

    /// Store a record under its query key, replacing any previous entry.
    async fn set(&self, key: &str, record: TrackRecord);

    /// Number of cached entries.
    async fn len(&self) -> usize;
}
