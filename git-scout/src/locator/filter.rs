//! Traversal skip rules.

use crate::config::DEFAULT_SKIP_NAMES;
use std::path::Path;

/// Name of the git metadata directory that marks a repository.
pub const GIT_DIR_NAME: &str = ".git";

/// What the locator should do with a directory it encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// The directory is a `.git` metadata directory; its parent is a
    /// repository. Never descended into.
    Repository,

    /// The directory is filtered out; do not descend.
    Skip,

    /// Keep walking into the directory.
    Descend,
}

/// Pure predicate deciding whether a directory is descended into.
///
/// Rules, in order:
/// 1. A base name of `.git` marks a repository.
/// 2. Hidden directories (leading `.`) and the fixed skip-name set
///    (`node_modules`, `vendor`, `bin`, `obj`) are skipped.
/// 3. Any directory whose full path contains a configured deny-list
///    substring is skipped.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    exclude: Vec<String>,
}

impl PathFilter {
    /// Builds a filter with the given deny-list of absolute path substrings.
    #[must_use]
    pub fn new(exclude: Vec<String>) -> Self {
        Self { exclude }
    }

    /// Classifies a directory path.
    #[must_use]
    pub fn check(&self, path: &Path) -> FilterDecision {
        let base = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        if base == GIT_DIR_NAME {
            return FilterDecision::Repository;
        }

        if base.starts_with('.') || DEFAULT_SKIP_NAMES.contains(&base.as_ref()) {
            return FilterDecision::Skip;
        }

        let full = path.to_string_lossy();
        if self.exclude.iter().any(|sub| full.contains(sub.as_str())) {
            return FilterDecision::Skip;
        }

        FilterDecision::Descend
    }
}
