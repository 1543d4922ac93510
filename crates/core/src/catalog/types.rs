use serde::{Deserialize, Serialize};

/// A resolved, playable track.
///
/// Immutable once cached; the `id` is the catalog's track identifier and is
/// what the front end feeds into the embedded player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    pub id: String,
    /// Album artwork URL, or the placeholder path when the catalog has none.
    pub img: String,
}
