//! Scan configuration loading.
//!
//! This module handles the optional TOML configuration file that supplies
//! the directory deny-list and the probe concurrency limit.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default number of repositories probed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Directory base names that are never descended into.
pub const DEFAULT_SKIP_NAMES: &[&str] = &["node_modules", "vendor", "bin", "obj"];

/// Configuration for a scan run.
///
/// Loaded from an optional TOML file:
///
/// ```toml
/// concurrency = 8
/// exclude = ["/mnt/backups", "C:/Windows"]
/// ```
///
/// `exclude` entries are absolute-path substrings; any directory whose full
/// path contains one of them is skipped during traversal. These are merged
/// with any `--exclude` flags given on the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Absolute path substrings excluded from traversal.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Maximum number of repositories probed at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ScanConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid
    /// TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading scan config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: ScanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::TomlError {
                path: path.display().to_string(),
                source: e,
            })?;

        config.validate(path)?;

        info!(
            excludes = config.exclude.len(),
            concurrency = config.concurrency,
            "Loaded scan config"
        );
        Ok(config)
    }

    /// Appends additional exclude substrings, e.g. from CLI flags.
    #[must_use]
    pub fn with_excludes(mut self, excludes: impl IntoIterator<Item = String>) -> Self {
        self.exclude.extend(excludes);
        self
    }

    /// Overrides the concurrency limit.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "concurrency must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
