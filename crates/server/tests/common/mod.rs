//! Common test utilities for API testing with mocks.
//!
//! Provides a test fixture that creates an in-process server with mock
//! chart and catalog providers injected, enabling full-stack API tests
//! without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use chartday_core::testing::{MockChartProvider, MockTrackCatalog};
use chartday_core::{ChartLookup, Config, MemoryTrackCache, TrackResolver};
use chartday_server::api::create_router;
use chartday_server::state::AppState;

/// Re-export fixtures for test convenience
pub use chartday_core::testing::fixtures;

/// Test fixture with an in-process router and controllable mocks.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock chart provider - configure charts per date
    pub chart: Arc<MockChartProvider>,
    /// Mock track catalog - configure search results
    pub catalog: Arc<MockTrackCatalog>,
    /// The process-lifetime track cache
    pub cache: Arc<MemoryTrackCache>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub fn new() -> Self {
        let chart = Arc::new(MockChartProvider::new());
        let catalog = Arc::new(MockTrackCatalog::new());
        let cache = Arc::new(MemoryTrackCache::new());

        let mut config = Config::default();
        config.catalog.client_id = "test-client".to_string();
        config.catalog.client_secret = "test-secret".to_string();

        let resolver = TrackResolver::new(cache.clone(), catalog.clone());
        let lookup = Arc::new(ChartLookup::new(chart.clone(), resolver));

        let state = Arc::new(AppState::new(config, lookup));
        let router = create_router(state);

        Self {
            router,
            chart,
            catalog,
            cache,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Configure a chart for `date` plus catalog tracks matching its
    /// first `resolvable` entries.
    pub async fn seed_chart(&self, date: &str, entries: u32, resolvable: u32) {
        self.chart.set_chart(fixtures::chart(date, entries)).await;
        for rank in 1..=resolvable {
            self.catalog
                .add_track(
                    &format!("Song {} Artist {}", rank, rank),
                    fixtures::track(rank),
                )
                .await;
        }
    }
}
