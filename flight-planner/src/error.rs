//! Crate-level error type.

use crate::dataset::DatasetError;
use crate::planner::{QueryError, SearchError};

/// Any error that stops a search from producing results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Search parameters were rejected
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Dataset could not be loaded
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Query airports are not served by the dataset
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Results could not be rendered
    #[error("failed to render results: {0}")]
    Json(#[from] serde_json::Error),
}
