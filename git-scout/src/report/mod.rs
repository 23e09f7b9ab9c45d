//! Result rendering: aligned text table and CSV export.

mod error;

pub use error::ReportError;

use crate::probe::RepoStatus;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest path rendered before eliding with a leading ellipsis.
const MAX_PATH_WIDTH: usize = 42;

/// Longest branch label rendered before eliding with a trailing ellipsis.
const MAX_BRANCH_WIDTH: usize = 17;

/// Status marker for a repository row.
#[must_use]
pub fn status_marker(status: &RepoStatus) -> &'static str {
    if status.is_error() {
        "Error"
    } else if status.is_clean {
        "Clean"
    } else {
        "Dirty"
    }
}

/// Path shortened for display: relative to `cwd` when below it, elided
/// with a leading `...` when longer than the column width.
#[must_use]
pub fn display_path(path: &Path, cwd: Option<&PathBuf>) -> String {
    let shown = cwd
        .and_then(|base| path.strip_prefix(base).ok())
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or(path);

    let text = shown.display().to_string();
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > MAX_PATH_WIDTH {
        let tail: String = chars[chars.len() - (MAX_PATH_WIDTH - 3)..].iter().collect();
        format!("...{tail}")
    } else {
        text
    }
}

/// Branch label elided with a trailing `...` when over the column width.
#[must_use]
pub fn display_branch(branch: &str) -> String {
    let chars: Vec<char> = branch.chars().collect();
    if chars.len() > MAX_BRANCH_WIDTH {
        let head: String = chars[..MAX_BRANCH_WIDTH - 3].iter().collect();
        format!("{head}...")
    } else {
        branch.to_string()
    }
}

/// Changes column: set flags joined with `", "`, the error text for
/// errored rows, `-` for clean ones.
fn changes_text(status: &RepoStatus) -> String {
    if let Some(error) = &status.error {
        error.clone()
    } else if status.is_clean {
        "-".to_string()
    } else {
        status.change_labels().join(", ")
    }
}

/// Writes the line-per-repository table.
pub fn render_table(statuses: &[RepoStatus], out: &mut impl Write) -> Result<(), ReportError> {
    let cwd = std::env::current_dir().ok();

    writeln!(
        out,
        "{:<45} {:<18} {:<8} {}",
        "Repository", "Branch", "Status", "Changes"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;

    for status in statuses {
        writeln!(
            out,
            "{:<45} {:<18} {:<8} {}",
            display_path(&status.path, cwd.as_ref()),
            display_branch(&status.branch),
            status_marker(status),
            changes_text(status)
        )?;
    }

    Ok(())
}

/// Writes the CSV export with header `Repository,Branch,Status,Changes`.
///
/// Values match the rendered table, except the status column carries
/// `Error: <text>` for errored rows so the export is self-contained.
pub fn export_csv(statuses: &[RepoStatus], path: &Path) -> Result<(), ReportError> {
    let cwd = std::env::current_dir().ok();
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Repository", "Branch", "Status", "Changes"])?;

    for status in statuses {
        let status_text = match &status.error {
            Some(error) => format!("Error: {error}"),
            None if status.is_clean => "Clean".to_string(),
            None => "Dirty".to_string(),
        };

        writer.write_record([
            display_path(&status.path, cwd.as_ref()),
            display_branch(&status.branch),
            status_text,
            status.change_labels().join(", "),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
