//! Dataset error types.

use std::path::PathBuf;

/// Errors that can occur while loading a flight dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Dataset file does not exist or is not a regular file
    #[error("invalid input dataset path: '{}'", .0.display())]
    NotFound(PathBuf),

    /// Dataset file could not be opened
    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structure is broken (bad quoting, missing header, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row could not be turned into a flight
    #[error("invalid flight on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}
