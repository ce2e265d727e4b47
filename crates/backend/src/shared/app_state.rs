use std::sync::Arc;

use super::config::{Config, DataConfig};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn data(&self) -> &DataConfig {
        &self.config.data
    }
}
