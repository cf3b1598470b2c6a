//! Error types and result types for store operations.
//!
//! Use [`StoreResult<T>`] as the return type for fallible operations.
//! Looking up a record that does not exist is not an error; read operations
//! return `Ok(None)` in that case.

use bson::error::Error as BsonError;
use thiserror::Error;

/// Represents all possible errors raised by the record-mapping layer.
///
/// Every error is local to the single operation that raised it; nothing is
/// retried or recovered internally.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An external identifier string is not a valid 24-character hex
    /// encoding of a native store reference.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
    /// A record field failed its declared constraint at construction time,
    /// before any store interaction.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    /// Serialization/deserialization error when converting a record to or
    /// from its storage document.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store initialization or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// An error from the underlying storage backend, propagated unmodified.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
