//! Orchestrates a scan: locate repositories, probe them concurrently,
//! collect every result before reporting.

mod config;

pub use config::RunnerConfig;

use crate::locator::{locate_repositories, PathFilter};
use crate::probe::{probe_repository, RepoStatus};
use crate::summary::RunSummary;
use futures::stream::{self, StreamExt};
use tracing::info;

/// Everything a scan produced.
#[derive(Debug)]
pub struct ScanOutcome {
    /// One status per reported repository, sorted by path.
    pub statuses: Vec<RepoStatus>,

    /// Aggregate counts over the run.
    pub summary: RunSummary,
}

/// Orchestrates a full scan run.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Executes the scan.
    ///
    /// Probes run concurrently, at most `concurrency` at a time, and all
    /// of them finish before any result is returned. There is no
    /// per-probe timeout and no retries; a failing repository shows up as
    /// an errored status, never as a run failure.
    pub async fn run(&self) -> ScanOutcome {
        let filter = PathFilter::new(self.config.exclude().to_vec());
        let repositories = locate_repositories(self.config.root(), &filter);

        let mut summary = RunSummary::new(self.config.dirty_only());
        summary.found = repositories.len();

        if repositories.is_empty() {
            return ScanOutcome {
                statuses: Vec::new(),
                summary,
            };
        }

        info!(
            count = repositories.len(),
            concurrency = self.config.concurrency(),
            "Probing repositories"
        );

        let mut statuses: Vec<RepoStatus> = stream::iter(repositories)
            .map(|repo| async move { probe_repository(&repo).await })
            .buffer_unordered(self.config.concurrency())
            .collect()
            .await;

        // Completion order is nondeterministic; sort for stable output.
        statuses.sort_by(|a, b| a.path.cmp(&b.path));

        if self.config.dirty_only() {
            statuses.retain(|status| status.is_error() || !status.is_clean);
        }

        for status in &statuses {
            summary.record(status);
        }

        ScanOutcome { statuses, summary }
    }
}
