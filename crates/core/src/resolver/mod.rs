//! Chart-to-tracks resolution.
//!
//! `TrackResolver` memoizes catalog lookups through the injected cache;
//! `ChartLookup` turns a date into the resolved top-10 with a concurrent,
//! all-or-nothing fan-out.

use std::sync::Arc;

use futures::future::try_join_all;
use thiserror::Error;
use tracing::debug;

use crate::cache::TrackCache;
use crate::catalog::{CatalogError, TrackCatalog, TrackRecord};
use crate::chart::{ChartError, ChartProvider};

/// How many chart entries a lookup resolves.
pub const TOP_COUNT: usize = 10;

/// Errors from a chart lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Resolves a query string to a track, memoizing results in the cache.
///
/// There is no per-key in-flight deduplication: concurrent first-time
/// lookups for the same key may each hit the catalog, and both converge on
/// the same cached record.
pub struct TrackResolver {
    cache: Arc<dyn TrackCache>,
    catalog: Arc<dyn TrackCatalog>,
}

impl TrackResolver {
    pub fn new(cache: Arc<dyn TrackCache>, catalog: Arc<dyn TrackCatalog>) -> Self {
        Self { cache, catalog }
    }

    /// Resolve a query, returning the cached record when present with no
    /// outbound calls.
    pub async fn resolve(&self, query: &str) -> Result<TrackRecord, CatalogError> {
        if let Some(record) = self.cache.get(query).await {
            debug!("Track cache hit: '{}'", query);
            return Ok(record);
        }

        let record = self.catalog.search_track(query).await?;
        self.cache.set(query, record.clone()).await;

        Ok(record)
    }
}

/// Resolves a chart date to its top tracks.
pub struct ChartLookup {
    chart: Arc<dyn ChartProvider>,
    resolver: TrackResolver,
}

impl ChartLookup {
    pub fn new(chart: Arc<dyn ChartProvider>, resolver: TrackResolver) -> Self {
        Self { chart, resolver }
    }

    /// Fetch the chart for `date` and resolve its top entries concurrently,
    /// preserving rank order.
    ///
    /// The join is all-or-nothing: one failed resolution fails the whole
    /// lookup and the other results are discarded.
    pub async fn top_tracks(&self, date: &str) -> Result<Vec<TrackRecord>, LookupError> {
        let chart = self.chart.fetch_chart(date).await?;

        let queries: Vec<String> = chart
            .top(TOP_COUNT)
            .iter()
            .map(|entry| entry.query())
            .collect();

        debug!("Resolving {} chart entries for '{}'", queries.len(), date);

        let records = try_join_all(queries.iter().map(|q| self.resolver.resolve(q))).await?;

        Ok(records)
    }
}
