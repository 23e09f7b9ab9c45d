//! Reporter error types.

use thiserror::Error;

/// Errors that can occur while rendering or exporting results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write the report.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write the CSV export.
    #[error("Failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
}
