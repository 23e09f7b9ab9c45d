//! Runner configuration.

use crate::config::{ScanConfig, DEFAULT_CONCURRENCY};
use std::path::{Path, PathBuf};

/// Configuration for one scan run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Traversal origin.
    root: PathBuf,
    /// Whether clean, error-free entries are suppressed.
    dirty_only: bool,
    /// Absolute path substrings excluded from traversal.
    exclude: Vec<String>,
    /// Maximum number of repositories probed at once.
    concurrency: usize,
}

impl RunnerConfig {
    /// Creates a configuration for scanning `root`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            dirty_only: false,
            exclude: Vec::new(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Applies the deny-list and concurrency limit from a [`ScanConfig`].
    #[must_use]
    pub fn with_scan_config(mut self, scan_config: ScanConfig) -> Self {
        self.exclude = scan_config.exclude;
        self.concurrency = scan_config.concurrency;
        self
    }

    /// Suppresses clean, error-free entries from the results.
    #[must_use]
    pub fn with_dirty_only(mut self, dirty_only: bool) -> Self {
        self.dirty_only = dirty_only;
        self
    }

    /// Returns the traversal origin.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns whether clean entries are suppressed.
    pub fn dirty_only(&self) -> bool {
        self.dirty_only
    }

    /// Returns the deny-list of absolute path substrings.
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Returns the max number of concurrent probes.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}
