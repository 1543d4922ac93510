use serde::{Deserialize, Serialize};

/// A single ranked chart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub title: String,
    pub artist: String,
    /// Chart position, 1-based.
    pub rank: u32,
}

impl ChartEntry {
    /// The catalog search query for this entry, also used verbatim as the
    /// track cache key. No normalization is applied: queries differing only
    /// in case or whitespace are distinct keys.
    pub fn query(&self) -> String {
        format!("{} {}", self.title, self.artist)
    }
}

/// A ranked chart for one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub date: String,
    /// Entries in rank order.
    pub entries: Vec<ChartEntry>,
}

impl Chart {
    /// The first `n` entries in rank order, fewer when the chart is short.
    pub fn top(&self, n: usize) -> &[ChartEntry] {
        &self.entries[..self.entries.len().min(n)]
    }
}
