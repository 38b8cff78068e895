//! Error type shared by the library and the binary

use thiserror::Error;

/// Everything that can go wrong in a finlog operation
#[derive(Error, Debug)]
pub enum FinlogError {
    /// Raw terminal or stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An audit entry could not be turned into JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User input that does not describe a valid record field
    #[error("Validation error: {0}")]
    Validation(String),

    /// A file backing the ledger, settings or audit log could not be written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The input stream ended while a prompt was waiting for an answer
    #[error("Input closed while waiting for: {0}")]
    InputClosed(String),
}

/// Result type alias for finlog operations
pub type FinlogResult<T> = Result<T, FinlogError>;
