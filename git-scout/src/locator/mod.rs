//! Repository discovery by filesystem traversal.
//!
//! Walks a root directory looking for `.git` metadata directories and
//! records their parents as repositories. Traversal is sequential and
//! best-effort: individual unreadable entries are skipped, not fatal.

mod filter;

pub use filter::{FilterDecision, PathFilter, GIT_DIR_NAME};

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Walks `root` and returns every directory that directly contains a
/// `.git` metadata directory.
///
/// The walk never descends into `.git` itself (its internal structure is
/// irrelevant and often huge) nor into directories the [`PathFilter`]
/// rejects. Entries that cannot be read are skipped and the walk continues
/// with their siblings. Results are in stable sorted walk order.
#[must_use]
pub fn locate_repositories(root: &Path, filter: &PathFilter) -> Vec<PathBuf> {
    info!(root = %root.display(), "Scanning for git repositories");

    let mut repositories = Vec::new();
    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();

    loop {
        let entry = match walker.next() {
            None => break,
            Some(Err(e)) => {
                // The root itself being unreadable is worth a warning;
                // anything deeper is routine permission noise.
                if e.depth() == 0 {
                    warn!(root = %root.display(), error = %e, "Cannot read scan root");
                } else {
                    debug!(error = %e, "Skipping (error accessing)");
                }
                continue;
            }
            Some(Ok(entry)) => entry,
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        debug!(path = %path.display(), "Visiting");

        // The root is never filtered, otherwise scanning "." or a hidden
        // directory would find nothing.
        if entry.depth() == 0 {
            continue;
        }

        match filter.check(path) {
            FilterDecision::Repository => {
                if let Some(parent) = path.parent() {
                    debug!(path = %parent.display(), "Found repository");
                    repositories.push(parent.to_path_buf());
                }
                walker.skip_current_dir();
            }
            FilterDecision::Skip => {
                debug!(path = %path.display(), "Skipping directory");
                walker.skip_current_dir();
            }
            FilterDecision::Descend => {}
        }
    }

    info!(count = repositories.len(), "Located repositories");
    repositories
}
