//! Test doubles for the chart and catalog providers.

mod mock_catalog;
mod mock_chart;

pub use mock_catalog::MockTrackCatalog;
pub use mock_chart::MockChartProvider;

/// Fixture builders shared by unit and integration tests.
pub mod fixtures {
    use crate::catalog::TrackRecord;
    use crate::chart::{Chart, ChartEntry};

    /// A chart with `count` generated entries in rank order.
    pub fn chart(date: &str, count: u32) -> Chart {
        Chart {
            date: date.to_string(),
            entries: (1..=count)
                .map(|rank| ChartEntry {
                    title: format!("Song {}", rank),
                    artist: format!("Artist {}", rank),
                    rank,
                })
                .collect(),
        }
    }

    /// A track record named after its rank, matching `chart` entries.
    pub fn track(rank: u32) -> TrackRecord {
        TrackRecord {
            name: format!("Song {}", rank),
            id: format!("track-{}", rank),
            img: format!("https://img.example/{}.jpg", rank),
        }
    }
}
