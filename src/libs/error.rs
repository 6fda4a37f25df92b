//! Error types for the record store.

use thiserror::Error;

/// Errors returned by store and query operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Initialization failed or never completed; fatal for the handle
    #[error("Todo store is unavailable: {0}")]
    StoreUnavailable(String),

    /// No record with this id
    #[error("Todo with ID {0} not found")]
    NotFound(i64),

    /// Page numbers and page sizes start at 1
    #[error("Invalid page request: page {page}, page size {page_size}")]
    InvalidPage { page: usize, page_size: usize },

    /// Underlying transaction failure
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The blocking worker running the transaction panicked or was cancelled
    #[error("Store worker failed: {0}")]
    Worker(String),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
