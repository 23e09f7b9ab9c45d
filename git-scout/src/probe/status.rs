//! Per-repository status record.

use serde::Serialize;
use std::path::PathBuf;

/// Result of probing one repository.
///
/// Built once by the prober and never mutated afterwards. `is_clean` is
/// true only when the probe ran to completion, no error was recorded and
/// none of the change flags are set.
#[derive(Debug, Clone, Serialize)]
pub struct RepoStatus {
    /// Absolute path of the working tree.
    pub path: PathBuf,

    /// Current branch name, `detached HEAD (<hash>)`, `detached HEAD`
    /// or `unknown`.
    pub branch: String,

    /// Modified files not yet staged.
    pub has_unstaged: bool,

    /// Staged but uncommitted files.
    pub has_staged: bool,

    /// Untracked, non-ignored files.
    pub has_untracked: bool,

    /// Commits on HEAD not present on the upstream branch.
    pub has_unpushed: bool,

    /// Whether the repository has nothing to commit or push.
    pub is_clean: bool,

    /// Error text accumulated across failed probe steps, joined with `"; "`.
    pub error: Option<String>,
}

impl RepoStatus {
    /// Creates an empty status for a repository path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            branch: String::new(),
            has_unstaged: false,
            has_staged: false,
            has_untracked: false,
            has_unpushed: false,
            is_clean: false,
            error: None,
        }
    }

    /// Returns true if any probe step recorded an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Labels for the change flags that are set, in display order.
    #[must_use]
    pub fn change_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.has_unstaged {
            labels.push("unstaged");
        }
        if self.has_staged {
            labels.push("staged");
        }
        if self.has_untracked {
            labels.push("untracked");
        }
        if self.has_unpushed {
            labels.push("unpushed");
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_labels_follow_display_order() {
        let mut status = RepoStatus::new("/tmp/repo");
        status.has_untracked = true;
        status.has_unstaged = true;

        assert_eq!(status.change_labels(), vec!["unstaged", "untracked"]);
    }

    #[test]
    fn new_status_is_not_clean_by_default() {
        let status = RepoStatus::new("/tmp/repo");

        assert!(!status.is_clean);
        assert!(!status.is_error());
    }
}
