//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! options from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

use super::types::ReportConfig;

/// Loads and provides access to report configuration.
///
/// # Example
///
/// ```no_run
/// use hrms_reports::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reports.yaml").unwrap();
/// println!("Trend window: {} days", loader.config().trend_window_days);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing ([`ReportError::ConfigNotFound`])
    /// - The file contains invalid YAML or unknown values
    ///   ([`ReportError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let config = Self::load_yaml::<ReportConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ReportResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}
