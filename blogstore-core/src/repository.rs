//! Repository interface exposing create/read operations per record type.
//!
//! The repository owns a backend handle and nothing else: no cache, no state
//! across calls, exactly one store round-trip per operation. Identifier
//! normalization happens here, at the boundary between record values and
//! storage documents.
//!
//! # Example
//!
//! ```ignore
//! use blogstore_core::{model::User, repository::Repository};
//!
//! let repository = Repository::new(backend);
//! let users = repository.records::<User>();
//!
//! let user = users.create(User::new("alice", "alice@example.com")?).await?;
//! let fetched = users.get(user.id.as_deref().unwrap()).await?;
//! ```

use std::marker::PhantomData;

use crate::{
    backend::StoreBackend,
    error::StoreResult,
    ident::{decode_external, encode_external},
    record::{Record, RecordExt},
};

/// Repository bound to a specific backend implementation.
///
/// Cheap to share by reference; all methods take `&self`.
#[derive(Debug)]
pub struct Repository<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> Repository<B> {
    /// Creates a repository over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the typed record set for `R`, named by the record type's
    /// collection.
    pub fn records<R: Record>(&self) -> RecordSet<'_, B, R> {
        RecordSet::new(R::collection_name(), &self.backend)
    }

    /// Persists an unpersisted record. See [`RecordSet::create`].
    pub async fn create<R: Record>(&self, record: R) -> StoreResult<R> {
        self.records::<R>().create(record).await
    }

    /// Fetches a record by its external identifier. See [`RecordSet::get`].
    pub async fn get<R: Record>(&self, id: &str) -> StoreResult<Option<R>> {
        self.records::<R>().get(id).await
    }
}

/// Type-safe handle to one record type's collection.
#[derive(Debug)]
pub struct RecordSet<'a, B: StoreBackend, R: Record> {
    name: &'static str,
    backend: &'a B,
    _record: PhantomData<R>,
}

impl<'a, B: StoreBackend, R: Record> RecordSet<'a, B, R> {
    fn new(name: &'static str, backend: &'a B) -> Self {
        Self {
            name,
            backend,
            _record: PhantomData,
        }
    }

    /// Returns the name of the collection backing this record set.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Persists a record and returns it with the store-assigned identifier
    /// set.
    ///
    /// The record is serialized with its self identifier excluded (it is
    /// absent pre-insert); the store assigns a native reference, which is set
    /// back on the record in external string form.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the record cannot be converted, or a
    /// backend error if the insert cannot complete. No retry is attempted.
    pub async fn create(&self, mut record: R) -> StoreResult<R> {
        let document = record.to_storage_document(false)?;
        let id = self.backend.insert_one(self.name, document).await?;
        record.set_id(encode_external(&id));

        Ok(record)
    }

    /// Fetches the record identified by the external identifier `id`.
    ///
    /// Returns `Ok(None)` when no record with that identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidId`](crate::error::StoreError) if `id` is
    /// malformed (no store call is made in that case), or a backend error if
    /// the lookup cannot complete.
    pub async fn get(&self, id: &str) -> StoreResult<Option<R>> {
        let id = decode_external(id)?;

        match self.backend.find_one(self.name, id).await? {
            Some(document) => Ok(Some(R::from_storage_document(document)?)),
            None => Ok(None),
        }
    }
}
