//! Billboard Hot 100 chart client.
//!
//! Billboard has no public API; the chart for a date is scraped from the
//! public chart page at `/charts/hot-100/<date>/`. Row markup is stable
//! enough that parsing is driven by three selectors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Chart, ChartEntry};
use super::{ChartError, ChartProvider};

/// Billboard chart client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillboardConfig {
    /// Base URL for chart pages (default: https://www.billboard.com/charts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// User-Agent string; the chart pages reject clients without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    format!(
        "chartday/{} (+https://github.com/lelloman/chartday)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_timeout() -> u64 {
    30
}

impl Default for BillboardConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

impl BillboardConfig {
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| "https://www.billboard.com/charts".to_string())
    }
}

/// Billboard Hot 100 scraping client.
pub struct BillboardChartClient {
    client: Client,
    base_url: String,
}

impl BillboardChartClient {
    /// Create a new Billboard client.
    pub fn new(config: BillboardConfig) -> Result<Self, ChartError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.effective_base_url(),
            client,
        })
    }
}

#[async_trait]
impl ChartProvider for BillboardChartClient {
    async fn fetch_chart(&self, date: &str) -> Result<Chart, ChartError> {
        let url = format!("{}/hot-100/{}/", self.base_url, date);

        debug!("Billboard chart fetch: date='{}'", date);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChartError::Status {
                status: status.as_u16(),
                message: truncate(&body, 200),
            });
        }

        let html = response.text().await?;
        let entries = parse_chart_html(&html)?;

        if entries.is_empty() {
            return Err(ChartError::EmptyChart(date.to_string()));
        }

        debug!("Billboard chart fetch: {} entries for '{}'", entries.len(), date);

        Ok(Chart {
            date: date.to_string(),
            entries,
        })
    }
}

/// Parse ranked (title, artist) entries out of a chart page.
///
/// Each chart row is a `o-chart-results-list-row-container` with the song
/// title in an `h3#title-of-a-story` heading and the artist in the
/// `c-label.a-no-trucate` span (the class misspelling is Billboard's own).
/// Rank is assigned by document order.
fn parse_chart_html(html: &str) -> Result<Vec<ChartEntry>, ChartError> {
    let row_sel = Selector::parse("div.o-chart-results-list-row-container").unwrap();
    let title_sel = Selector::parse("h3#title-of-a-story").unwrap();
    let artist_sel = Selector::parse("span.c-label.a-no-trucate").unwrap();

    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    for row in document.select(&row_sel) {
        let Some(title_el) = row.select(&title_sel).next() else {
            continue;
        };
        let title = collapse_whitespace(&title_el.text().collect::<String>());
        if title.is_empty() {
            continue;
        }

        let artist = row
            .select(&artist_sel)
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .ok_or_else(|| ChartError::Parse(format!("chart row '{}' has no artist label", title)))?;

        entries.push(ChartEntry {
            title,
            artist,
            rank: entries.len() as u32 + 1,
        });
    }

    Ok(entries)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
