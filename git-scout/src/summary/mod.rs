//! Run summary types and helpers.

use crate::probe::RepoStatus;

/// Counts accumulated over one scan run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Repositories located in the tree.
    pub found: usize,

    /// Repositories with nothing to commit or push.
    pub clean: usize,

    /// Repositories with uncommitted or unpushed changes.
    pub dirty: usize,

    /// Repositories whose probe recorded an error.
    pub errored: usize,

    /// Whether clean entries were suppressed from the report.
    pub dirty_only: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dirty_only: bool) -> Self {
        Self {
            dirty_only,
            ..Default::default()
        }
    }

    /// Updates the summary with one probed status.
    pub fn record(&mut self, status: &RepoStatus) {
        if status.is_error() {
            self.errored += 1;
        } else if status.is_clean {
            self.clean += 1;
        } else {
            self.dirty += 1;
        }
    }

    /// Returns true if any probe recorded an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errored > 0
    }

    /// One-line human-readable rendering.
    ///
    /// In dirty-only mode the clean count is meaningless (clean entries
    /// were dropped before counting) and is omitted.
    #[must_use]
    pub fn render(&self) -> String {
        if self.dirty_only {
            format!(
                "Summary: {} repositories with uncommitted changes, {} repositories with errors",
                self.dirty, self.errored
            )
        } else {
            format!(
                "Summary: {} clean repositories, {} repositories with uncommitted changes, {} repositories with errors",
                self.clean, self.dirty, self.errored
            )
        }
    }
}
