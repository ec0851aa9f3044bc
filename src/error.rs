//! Error types for FileDB
//!
//! Provides a unified error type for all store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for FileDB operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    /// Empty or malformed collection/resource name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Neither the bare path nor the document path exists
    #[error("Unable to find file or directory named {}", .0.display())]
    NotFound(PathBuf),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Decode error in {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// True for `InvalidArgument`
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StoreError::InvalidArgument(_))
    }
}
