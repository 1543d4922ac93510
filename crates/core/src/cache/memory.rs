use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TrackCache;
use crate::catalog::TrackRecord;

/// In-memory track cache.
#[derive(Debug, Default)]
pub struct MemoryTrackCache {
    entries: RwLock<HashMap<String, TrackRecord>>,
}

impl MemoryTrackCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackCache for MemoryTrackCache {
    async fn get(&self, key: &str) -> Option<TrackRecord> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, record: TrackRecord) {
        self.entries.write().await.insert(key.to_string(), record);
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
