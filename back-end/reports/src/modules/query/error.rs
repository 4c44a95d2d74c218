//! Error types for report queries.

use thiserror::Error;

use crate::modules::store::StoreError;

/// Canonical text reported when an asynchronous search cannot run.
pub const SEARCH_FAILURE_MESSAGE: &str = "Search Function Error";

/// Errors that can occur while answering a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The snapshot violates referential integrity.
    #[error("integrity violation: {0}")]
    Integrity(#[from] StoreError),

    /// The search could not run; the snapshot was never obtained or the
    /// enclosing handler caught a failure.
    #[error("Search Function Error: {reason}")]
    SearchFailed { reason: String },

    /// The snapshot could not be fetched for an aggregation.
    #[error("fetch failed: {reason}")]
    FetchFailed { reason: String },
}

impl QueryError {
    /// Create a search failure.
    pub fn search_failed(reason: impl Into<String>) -> Self {
        Self::SearchFailed {
            reason: reason.into(),
        }
    }

    /// Create a fetch failure.
    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            reason: reason.into(),
        }
    }

    /// Returns true if this is the reported search failure outcome.
    pub fn is_search_failure(&self) -> bool {
        matches!(self, Self::SearchFailed { .. })
    }

    /// Get the error code string for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Integrity(_) => "INTEGRITY_VIOLATION",
            Self::SearchFailed { .. } => "SEARCH_FAILED",
            Self::FetchFailed { .. } => "FETCH_FAILED",
        }
    }
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
