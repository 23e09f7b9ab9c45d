//! Per-repository status probing.
//!
//! Each probe is a short sequence of `git` subprocess invocations against
//! one working tree: validity, branch, unstaged/staged diffs, untracked
//! files, unpushed commits. Failures are recorded on the status rather
//! than propagated; only a validity failure or a diff/listing failure
//! stops the remaining steps.

mod ownership;
mod status;

pub use ownership::{is_dubious_ownership, remediation_hint, safe_directory_value};
pub use status::RepoStatus;

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, debug_span, Instrument};

/// Captured result of one git invocation.
struct GitOutput {
    stdout: String,
    stderr: String,
    code: Option<i32>,
    success: bool,
}

impl GitOutput {
    /// Human-readable failure text: stderr if git produced any, the exit
    /// status otherwise.
    fn failure_text(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            stderr.to_string()
        } else {
            match self.code {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            }
        }
    }
}

/// Runs `git -C <repo> <args>` and captures its output.
///
/// A spawn failure (e.g. git missing from PATH) is folded into a failed
/// [`GitOutput`] so call sites handle both cases the same way.
async fn run_git(repo: &Path, args: &[&str]) -> GitOutput {
    let result = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match result {
        Ok(output) => GitOutput {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            code: output.status.code(),
            success: output.status.success(),
        },
        Err(e) => GitOutput {
            stdout: String::new(),
            stderr: format!("failed to execute git: {e}"),
            code: None,
            success: false,
        },
    }
}

/// Records a step failure on the status.
///
/// The first failure uses the full `first` message; later failures are
/// appended with `"; "` using the shorter `appended` form.
fn record_failure(status: &mut RepoStatus, first: String, appended: String) {
    match &mut status.error {
        None => status.error = Some(first),
        Some(existing) => {
            existing.push_str("; ");
            existing.push_str(&appended);
        }
    }
}

/// Checks whether `path` is a git working tree at all.
///
/// Returns false with the error already recorded when the probe must stop
/// here, true when probing can continue.
async fn check_validity(path: &Path, status: &mut RepoStatus) -> bool {
    let validity = run_git(path, &["rev-parse", "--git-dir"]).await;
    if validity.success {
        return true;
    }

    if is_dubious_ownership(&validity.stderr) {
        status.error = Some(remediation_hint(path));
    } else {
        status.error = Some("Not a valid git repository".to_string());
    }
    false
}

/// Resolves the branch label. Never stops the probe.
async fn resolve_branch(path: &Path, status: &mut RepoStatus) {
    let branch = run_git(path, &["symbolic-ref", "--short", "HEAD"]).await;
    if branch.success {
        status.branch = branch.stdout;
        return;
    }

    // When HEAD points directly at a commit, symbolic-ref fails with
    // "fatal: ref HEAD is not a symbolic ref" (exit 128). Validity already
    // passed, so that failure means a detached checkout, not a broken one.
    if branch.stderr.contains("not a symbolic ref") || branch.code == Some(1) {
        let commit = run_git(path, &["rev-parse", "--short", "HEAD"]).await;
        if commit.success {
            status.branch = format!("detached HEAD ({})", commit.stdout);
        } else {
            status.branch = "detached HEAD".to_string();
            let text = branch.failure_text();
            record_failure(
                status,
                format!("Branch issue: {text}"),
                format!("branch check failed: {text}"),
            );
        }
    } else {
        status.branch = "unknown".to_string();
        let text = branch.failure_text();
        record_failure(
            status,
            format!("Branch issue: {text}"),
            format!("branch check failed: {text}"),
        );
    }
}

/// Checks for unpushed commits. Best-effort: failures other than a
/// missing upstream are logged and otherwise ignored.
async fn check_unpushed(path: &Path, status: &mut RepoStatus) {
    let unpushed = run_git(path, &["rev-list", "--count", "@{u}..HEAD"]).await;
    if unpushed.success {
        status.has_unpushed = unpushed.stdout != "0";
        return;
    }

    // Exit 128 means no upstream is configured. Fall back to counting all
    // commits on HEAD; a repository that was never pushed anywhere counts
    // as having unpushed work.
    if unpushed.code == Some(128) {
        let commits = run_git(path, &["rev-list", "--count", "HEAD"]).await;
        if commits.success && commits.stdout != "0" {
            status.has_unpushed = true;
        }
    } else {
        debug!(
            repo = %path.display(),
            error = %unpushed.failure_text(),
            "Failed to check unpushed commits"
        );
    }
}

/// Runs only the validity check and reports whether it failed with git's
/// ownership/trust rejection. Used by the ownership fixer.
pub async fn has_ownership_issue(path: &Path) -> bool {
    let validity = run_git(path, &["rev-parse", "--git-dir"]).await;
    !validity.success && is_dubious_ownership(&validity.stderr)
}

/// Probes one repository and returns its status.
///
/// The returned status always carries the repository path; any step
/// failures are recorded in its `error` field per the policy described in
/// the module docs.
pub async fn probe_repository(path: &Path) -> RepoStatus {
    let span = debug_span!("probe", repo = %path.display());

    async {
        let mut status = RepoStatus::new(path);

        if !check_validity(path, &mut status).await {
            return status;
        }

        resolve_branch(path, &mut status).await;

        let unstaged = run_git(path, &["diff", "--name-only"]).await;
        if !unstaged.success {
            let text = unstaged.failure_text();
            record_failure(
                &mut status,
                format!("Failed to check unstaged changes: {text}"),
                format!("unstaged check failed: {text}"),
            );
            return status;
        }
        status.has_unstaged = !unstaged.stdout.is_empty();

        let staged = run_git(path, &["diff", "--cached", "--name-only"]).await;
        if !staged.success {
            let text = staged.failure_text();
            record_failure(
                &mut status,
                format!("Failed to check staged changes: {text}"),
                format!("staged check failed: {text}"),
            );
            return status;
        }
        status.has_staged = !staged.stdout.is_empty();

        let untracked = run_git(path, &["ls-files", "--others", "--exclude-standard"]).await;
        if !untracked.success {
            let text = untracked.failure_text();
            record_failure(
                &mut status,
                format!("Failed to check untracked files: {text}"),
                format!("untracked check failed: {text}"),
            );
            return status;
        }
        status.has_untracked = !untracked.stdout.is_empty();

        check_unpushed(path, &mut status).await;

        // Only a probe that ran to completion may report clean, and never
        // one that recorded an error along the way.
        status.is_clean = status.error.is_none()
            && !status.has_unstaged
            && !status.has_staged
            && !status.has_untracked
            && !status.has_unpushed;

        status
    }
    .instrument(span)
    .await
}
