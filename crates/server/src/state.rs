use std::sync::Arc;

use chartday_core::{ChartLookup, Config, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    lookup: Arc<ChartLookup>,
}

impl AppState {
    pub fn new(config: Config, lookup: Arc<ChartLookup>) -> Self {
        Self { config, lookup }
    }

    pub fn lookup(&self) -> &ChartLookup {
        &self.lookup
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }
}
