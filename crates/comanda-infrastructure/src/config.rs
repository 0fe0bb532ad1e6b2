//! Application configuration.

use crate::paths::ComandaPaths;
use comanda_core::error::{ComandaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default base url of the record store backend.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3001";

/// Host configuration: where the record store lives and where durable
/// storage is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base url of the record store API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Durable storage document path; resolved from the platform data dir
    /// when absent.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            storage_path: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the platform config file.
    ///
    /// A missing file yields defaults; a malformed file is a configuration
    /// error (silently ignoring it would hide typos from the operator).
    pub fn load() -> Result<Self> {
        let path = ComandaPaths::config_file()
            .map_err(|e| ComandaError::config(e.to_string()))?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// The effective durable storage path.
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => ComandaPaths::storage_file()
                .map_err(|e| ComandaError::config(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storage_path = \"/tmp/comanda.json\"\n").unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/comanda.json")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = [not toml").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ComandaError::Serialization { .. }));
    }
}
