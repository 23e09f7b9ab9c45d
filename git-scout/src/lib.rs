#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod fixer;
pub mod locator;
pub mod probe;
pub mod report;
pub mod runner;
pub mod summary;

pub use config::{ConfigError, ScanConfig, DEFAULT_CONCURRENCY, DEFAULT_SKIP_NAMES};
pub use fixer::{fix_ownership, FixOutcome, FixReport, FixResult, FixerError};
pub use locator::{locate_repositories, FilterDecision, PathFilter, GIT_DIR_NAME};
pub use probe::{
    has_ownership_issue, is_dubious_ownership, probe_repository, remediation_hint,
    safe_directory_value, RepoStatus,
};
pub use report::{export_csv, render_table, ReportError};
pub use runner::{Runner, RunnerConfig, ScanOutcome};
pub use summary::RunSummary;
