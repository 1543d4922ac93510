//! Chart provider abstraction.
//!
//! This module provides a `ChartProvider` trait for fetching ranked song
//! charts for a given date, with a Billboard Hot 100 scraping backend.

mod billboard;
mod types;

pub use billboard::{BillboardChartClient, BillboardConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Chart page returned a non-success status.
    #[error("Chart request failed: {status} - {message}")]
    Status { status: u16, message: String },

    /// The page parsed but contained no chart entries.
    #[error("No chart entries found for date: {0}")]
    EmptyChart(String),

    /// Failed to parse the chart page.
    #[error("Failed to parse chart page: {0}")]
    Parse(String),
}

/// Trait for chart providers.
///
/// A provider yields the ranked song list for a given chart date. The date
/// is passed through verbatim; validation is left to the upstream service.
#[async_trait]
pub trait ChartProvider: Send + Sync {
    /// Fetch the ranked chart for a date ("YYYY-MM-DD").
    async fn fetch_chart(&self, date: &str) -> Result<Chart, ChartError>;
}
