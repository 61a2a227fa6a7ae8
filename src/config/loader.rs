//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file, and the YAML helper shared with the seed
//! loader.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ReportError, ReportResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use production_reports::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Binding to {}", loader.config().bind_address());
/// # Ok::<(), production_reports::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let config = load_yaml::<ServiceConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Loads and parses a YAML file.
pub(crate) fn load_yaml<T: DeserializeOwned>(path: &Path) -> ReportResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
