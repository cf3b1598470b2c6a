//! Storage backend abstraction for the record-mapping layer.
//!
//! The repository consumes exactly two primitives from a backend: insert one
//! document into a collection (the store assigns the native reference) and
//! find one document by native-reference equality. Connection management,
//! pooling, and timeouts are the backend's concern; the traits here only
//! shuttle documents.

use async_trait::async_trait;
use bson::{Document, oid::ObjectId};
use std::fmt::Debug;

use crate::error::StoreResult;

/// Abstract interface for document storage backends.
///
/// Implementations must be thread-safe; the repository holds a backend by
/// value and shares it by reference across calls without mutating it.
///
/// Operations return [`StoreResult<T>`](crate::error::StoreResult); backend
/// failures surface as [`StoreError::Backend`](crate::error::StoreError) and
/// are never retried by the caller.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts one document into a collection and returns the native
    /// reference the store assigned to it.
    ///
    /// The document must not carry the reserved `_id` key; the store owns
    /// self-identifier assignment.
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Finds the single document whose self identifier equals `id`.
    ///
    /// Returns `Ok(None)` when no such document exists; absence is not an
    /// error. A returned document carries its self identifier under the
    /// reserved `_id` key.
    async fn find_one(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;
}

/// Factory trait for creating backend instances.
///
/// Backend configuration (connection strings, database names) lives in the
/// builder; the built backend is handed to the repository as a single
/// immutable dependency.
#[async_trait]
pub trait StoreBackendBuilder {
    /// The backend type this builder produces.
    type Backend: StoreBackend;

    /// Builds the backend instance.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Initialization`](crate::error::StoreError) if
    /// the backend cannot be constructed.
    async fn build(self) -> StoreResult<Self::Backend>;
}
