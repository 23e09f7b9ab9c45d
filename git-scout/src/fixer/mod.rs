//! Ownership fixer: finds repositories rejected by git's `safe.directory`
//! check and registers them as trusted.

use crate::locator::{locate_repositories, PathFilter};
use crate::probe::{has_ownership_issue, safe_directory_value};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

/// Errors from the corrective `git config` invocation.
#[derive(Debug, Error)]
pub enum FixerError {
    /// git could not be executed at all.
    #[error("Failed to execute git: {0}")]
    Io(#[from] std::io::Error),

    /// git ran but refused the configuration change.
    #[error("git config failed: {stderr}")]
    GitFailed { stderr: String },
}

/// What happened to one repository during a fix run.
#[derive(Debug, Clone)]
pub enum FixOutcome {
    /// The path was registered as trusted.
    Fixed,

    /// The repository had no ownership issue (including already-fixed
    /// paths on a second run).
    NoIssue,

    /// The corrective command failed.
    Failed {
        /// Error message.
        error: String,
    },
}

/// Per-repository fix result.
#[derive(Debug, Clone)]
pub struct FixResult {
    /// Repository path.
    pub path: PathBuf,

    /// What happened.
    pub outcome: FixOutcome,
}

/// Results of a whole fix run.
#[derive(Debug, Default)]
pub struct FixReport {
    /// One result per located repository, in walk order.
    pub results: Vec<FixResult>,
}

impl FixReport {
    /// Number of repositories registered as trusted in this run.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, FixOutcome::Fixed))
            .count()
    }

    /// Number of repositories where the corrective command failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, FixOutcome::Failed { .. }))
            .count()
    }
}

/// Registers a path under `safe.directory` in the global git config.
///
/// Idempotent from the fixer's point of view: a path already registered
/// no longer trips the ownership check, so a second run reports
/// [`FixOutcome::NoIssue`] instead of re-adding it.
async fn register_safe_directory(path: &Path) -> Result<(), FixerError> {
    let output = Command::new("git")
        .args(["config", "--global", "--add", "safe.directory"])
        .arg(safe_directory_value(path))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        return Err(FixerError::GitFailed {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

/// Walks `root`, checks every repository for the ownership rejection and
/// issues one corrective configuration command per affected repository.
pub async fn fix_ownership(root: &Path, filter: &PathFilter) -> FixReport {
    let repositories = locate_repositories(root, filter);
    let mut report = FixReport::default();

    for repo in repositories {
        let outcome = if has_ownership_issue(&repo).await {
            info!(repo = %repo.display(), "Fixing ownership");
            match register_safe_directory(&repo).await {
                Ok(()) => FixOutcome::Fixed,
                Err(e) => FixOutcome::Failed {
                    error: e.to_string(),
                },
            }
        } else {
            debug!(repo = %repo.display(), "No ownership issue");
            FixOutcome::NoIssue
        };

        report.results.push(FixResult {
            path: repo,
            outcome,
        });
    }

    info!(fixed = report.fixed_count(), "Fix run complete");
    report
}
