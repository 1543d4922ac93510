pub mod cache;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod resolver;
pub mod testing;

pub use cache::{MemoryTrackCache, TrackCache};
pub use catalog::{
    CatalogError, ClientCredentials, CredentialProvider, SpotifyCatalogClient, SpotifyConfig,
    TrackCatalog, TrackRecord, PLACEHOLDER_ARTWORK,
};
pub use chart::{BillboardChartClient, BillboardConfig, Chart, ChartEntry, ChartError, ChartProvider};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig,
};
pub use resolver::{ChartLookup, LookupError, TrackResolver, TOP_COUNT};
