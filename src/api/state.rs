//! Shared state for the reports API.

use std::sync::Arc;

use crate::config::{ConfigLoader, ReportConfig};

/// Shared application state.
///
/// Holds the loaded report configuration, read by every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The active report configuration.
    pub fn config(&self) -> &ReportConfig {
        self.config.config()
    }
}
