//! Classification of git's ownership/trust rejection.
//!
//! Git refuses to operate on a working tree owned by another user unless
//! the path is registered under `safe.directory`. The refusal is only
//! visible as human-oriented stderr text, so the string match lives here
//! in one place in case git ever exposes a structured signal.

use std::path::Path;

/// Stderr signature of git's `safe.directory` refusal.
const DUBIOUS_OWNERSHIP_SIGNATURE: &str = "dubious ownership";

/// Returns true if the stderr text is git's ownership/trust rejection.
#[must_use]
pub fn is_dubious_ownership(stderr: &str) -> bool {
    stderr.contains(DUBIOUS_OWNERSHIP_SIGNATURE)
}

/// Path value expected by `safe.directory`, with forward slashes.
#[must_use]
pub fn safe_directory_value(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Actionable remediation message naming the exact corrective command.
#[must_use]
pub fn remediation_hint(path: &Path) -> String {
    format!(
        "Git ownership issue - run: git config --global --add safe.directory {}",
        safe_directory_value(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_ownership_rejection() {
        let stderr = "fatal: detected dubious ownership in repository at '/srv/repo'\n\
                      To add an exception for this directory, call:\n\
                      \tgit config --global --add safe.directory /srv/repo";

        assert!(is_dubious_ownership(stderr));
    }

    #[test]
    fn ignores_other_failures() {
        assert!(!is_dubious_ownership(
            "fatal: not a git repository (or any of the parent directories): .git"
        ));
    }

    #[test]
    fn normalizes_path_separators() {
        let path = PathBuf::from(r"C:\Users\dev\project");

        assert_eq!(safe_directory_value(&path), "C:/Users/dev/project");
    }

    #[test]
    fn hint_names_the_corrective_command() {
        let hint = remediation_hint(&PathBuf::from("/srv/repo"));

        assert_eq!(
            hint,
            "Git ownership issue - run: git config --global --add safe.directory /srv/repo"
        );
    }
}
