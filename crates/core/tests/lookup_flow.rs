//! Integration tests for the chart-to-tracks resolution flow.

use std::sync::Arc;
use std::time::Duration;

use chartday_core::testing::{fixtures, MockChartProvider, MockTrackCatalog};
use chartday_core::{
    CatalogError, ChartError, ChartLookup, LookupError, MemoryTrackCache, TrackCache,
    TrackResolver,
};

struct Harness {
    chart: Arc<MockChartProvider>,
    catalog: Arc<MockTrackCatalog>,
    cache: Arc<MemoryTrackCache>,
    lookup: ChartLookup,
}

fn harness() -> Harness {
    let chart = Arc::new(MockChartProvider::new());
    let catalog = Arc::new(MockTrackCatalog::new());
    let cache = Arc::new(MemoryTrackCache::new());

    let resolver = TrackResolver::new(cache.clone(), catalog.clone());
    let lookup = ChartLookup::new(chart.clone(), resolver);

    Harness {
        chart,
        catalog,
        cache,
        lookup,
    }
}

/// Configure tracks matching the generated chart entries 1..=count.
async fn add_matching_tracks(catalog: &MockTrackCatalog, count: u32) {
    for rank in 1..=count {
        catalog
            .add_track(
                &format!("Song {} Artist {}", rank, rank),
                fixtures::track(rank),
            )
            .await;
    }
}

#[tokio::test]
async fn test_top_tracks_preserves_rank_order() {
    let h = harness();
    h.chart.set_chart(fixtures::chart("1990-07-14", 3)).await;
    add_matching_tracks(&h.catalog, 3).await;

    let tracks = h.lookup.top_tracks("1990-07-14").await.unwrap();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].name, "Song 1");
    assert_eq!(tracks[1].name, "Song 2");
    assert_eq!(tracks[2].name, "Song 3");
}

#[tokio::test]
async fn test_top_tracks_caps_at_ten() {
    let h = harness();
    h.chart.set_chart(fixtures::chart("1990-07-14", 25)).await;
    add_matching_tracks(&h.catalog, 10).await;

    let tracks = h.lookup.top_tracks("1990-07-14").await.unwrap();

    assert_eq!(tracks.len(), 10);
    assert_eq!(tracks[9].name, "Song 10");
    // Entries past the tenth are never searched
    assert_eq!(h.catalog.search_count().await, 10);
}

#[tokio::test]
async fn test_cached_query_issues_no_outbound_calls() {
    let h = harness();
    h.chart.set_chart(fixtures::chart("1990-07-14", 2)).await;
    add_matching_tracks(&h.catalog, 2).await;

    h.lookup.top_tracks("1990-07-14").await.unwrap();
    assert_eq!(h.catalog.search_count().await, 2);

    // Second lookup for the same date resolves entirely from cache
    let tracks = h.lookup.top_tracks("1990-07-14").await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(h.catalog.search_count().await, 2);
}

#[tokio::test]
async fn test_case_variant_queries_are_distinct_cache_entries() {
    let h = harness();
    let resolver = TrackResolver::new(h.cache.clone(), h.catalog.clone());

    h.catalog.add_track("Song 1 Artist 1", fixtures::track(1)).await;
    h.catalog.add_track("song 1 artist 1", fixtures::track(1)).await;

    resolver.resolve("Song 1 Artist 1").await.unwrap();
    resolver.resolve("song 1 artist 1").await.unwrap();

    assert_eq!(h.catalog.search_count().await, 2);
    assert_eq!(h.cache.len().await, 2);
}

#[tokio::test]
async fn test_single_failed_resolution_fails_the_whole_lookup() {
    let h = harness();
    h.chart.set_chart(fixtures::chart("1990-07-14", 3)).await;
    // Entry 3 has no catalog match: zero-result search
    add_matching_tracks(&h.catalog, 2).await;

    let result = h.lookup.top_tracks("1990-07-14").await;

    assert!(matches!(
        result,
        Err(LookupError::Catalog(CatalogError::NoTrackFound(_)))
    ));
}

#[tokio::test]
async fn test_chart_failure_propagates() {
    let h = harness();
    h.chart
        .set_next_error(ChartError::Status {
            status: 503,
            message: "upstream down".to_string(),
        })
        .await;

    let result = h.lookup.top_tracks("1990-07-14").await;
    assert!(matches!(result, Err(LookupError::Chart(_))));
}

#[tokio::test]
async fn test_concurrent_first_misses_both_search_and_converge() {
    let h = harness();
    let resolver = Arc::new(TrackResolver::new(h.cache.clone(), h.catalog.clone()));

    h.catalog.add_track("Song 1 Artist 1", fixtures::track(1)).await;
    // Hold each search open long enough for the misses to overlap
    h.catalog.set_search_delay(Duration::from_millis(20)).await;

    let a = resolver.clone();
    let b = resolver.clone();
    let (ra, rb) = tokio::join!(
        tokio::spawn(async move { a.resolve("Song 1 Artist 1").await }),
        tokio::spawn(async move { b.resolve("Song 1 Artist 1").await }),
    );

    let ra = ra.unwrap().unwrap();
    let rb = rb.unwrap().unwrap();
    assert_eq!(ra, rb);

    // No in-flight dedup: both misses performed a search
    assert_eq!(h.catalog.search_count().await, 2);
    // But the cache converged on a single entry
    assert_eq!(h.cache.len().await, 1);
}
