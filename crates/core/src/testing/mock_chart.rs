//! Mock chart provider for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::chart::{Chart, ChartError, ChartProvider};

/// Mock implementation of the `ChartProvider` trait.
///
/// Charts are configured per date; unknown dates behave like an empty
/// upstream chart. Fetches are recorded for assertions, and a one-shot
/// error can be injected.
#[derive(Debug, Default)]
pub struct MockChartProvider {
    charts: RwLock<HashMap<String, Chart>>,
    fetched: RwLock<Vec<String>>,
    next_error: RwLock<Option<ChartError>>,
}

impl MockChartProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the chart returned for its date.
    pub async fn set_chart(&self, chart: Chart) {
        self.charts.write().await.insert(chart.date.clone(), chart);
    }

    /// Dates fetched so far, in order.
    pub async fn fetched_dates(&self) -> Vec<String> {
        self.fetched.read().await.clone()
    }

    /// Number of fetches performed.
    pub async fn fetch_count(&self) -> usize {
        self.fetched.read().await.len()
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: ChartError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl ChartProvider for MockChartProvider {
    async fn fetch_chart(&self, date: &str) -> Result<Chart, ChartError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.fetched.write().await.push(date.to_string());

        self.charts
            .read()
            .await
            .get(date)
            .cloned()
            .ok_or_else(|| ChartError::EmptyChart(date.to_string()))
    }
}
