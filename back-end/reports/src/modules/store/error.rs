//! Error types for the report store and its data sources.

use std::time::Duration;

use thiserror::Error;

use super::models::{DocumentId, PageId, ReportId};

/// Errors raised while resolving records or fetching a snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A page points at a document that is not in the snapshot.
    #[error("page {page_id} references missing document {document_id}")]
    DanglingDocument {
        page_id: PageId,
        document_id: DocumentId,
    },

    /// A document points at a report that is not in the snapshot.
    #[error("document {document_id} references missing report {report_id}")]
    DanglingReport {
        document_id: DocumentId,
        report_id: ReportId,
    },

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },

    /// A collection key disagrees with the id stored in its record.
    #[error("{kind} keyed as {key} carries id {id}")]
    KeyMismatch { kind: &'static str, key: u64, id: u64 },

    /// The data source could not be reached.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// Reading the snapshot failed.
    #[error("io error: {0}")]
    Io(String),

    /// The snapshot could not be decoded.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The fetch did not complete in time.
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
}

impl StoreError {
    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create an io error.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create a deserialization error.
    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }

    /// Returns true for defects in the snapshot itself, as opposed to
    /// failures to obtain it.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            Self::DanglingDocument { .. }
                | Self::DanglingReport { .. }
                | Self::DuplicateId { .. }
                | Self::KeyMismatch { .. }
        )
    }

    /// Get the error code string for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DanglingDocument { .. } => "DANGLING_DOCUMENT",
            Self::DanglingReport { .. } => "DANGLING_REPORT",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::KeyMismatch { .. } => "KEY_MISMATCH",
            Self::Unavailable(_) => "SOURCE_UNAVAILABLE",
            Self::Io(_) => "IO_ERROR",
            Self::Deserialization(_) => "DESERIALIZATION_ERROR",
            Self::Timeout(_) => "TIMEOUT",
        }
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
