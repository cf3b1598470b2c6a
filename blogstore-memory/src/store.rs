//! In-memory storage implementation.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use bson::{Document, oid::ObjectId};
use mea::rwlock::RwLock;

use blogstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
};

type CollectionMap = HashMap<ObjectId, Document>;
type StoreMap = HashMap<String, CollectionMap>;

/// Thread-safe in-memory document storage backend.
///
/// Documents are stored in HashMaps behind an async-aware read-write lock.
/// Like the MongoDB backend, the store assigns each inserted document a fresh
/// native reference and returns found documents with the reference under the
/// reserved `_id` key.
///
/// `InMemoryStore` is cheap to clone; clones share the same underlying data.
///
/// # Example
///
/// ```ignore
/// use blogstore_memory::InMemoryStore;
/// use blogstore_core::backend::StoreBackend;
/// use bson::doc;
///
/// let store = InMemoryStore::new();
/// let id = store.insert_one("users", doc! { "username": "alice" }).await?;
/// let found = store.find_one("users", id).await?;
/// assert!(found.is_some());
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection name -> (document id -> document)
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}

#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let mut store = self.store.write().await;
        let collection_map = store.entry(collection.to_string()).or_default();

        let id = ObjectId::new();
        if collection_map.contains_key(&id) {
            return Err(StoreError::Backend(format!(
                "duplicate key {id} in collection {collection}"
            )));
        }

        let mut stored = Document::new();
        stored.insert("_id", id);
        stored.extend(document);
        collection_map.insert(id, stored);

        Ok(id)
    }

    async fn find_one(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        let store = self.store.read().await;

        Ok(store
            .get(collection)
            .and_then(|collection_map| collection_map.get(&id))
            .cloned())
    }
}

/// Builder for [`InMemoryStore`].
///
/// Currently carries no options; it exists so the in-memory backend can be
/// constructed through the same [`StoreBackendBuilder`] interface as
/// persistent backends.
#[derive(Default)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(InMemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn insert_assigns_a_reference_and_stores_it_under_the_reserved_key() {
        let store = InMemoryStore::new();
        let id = store
            .insert_one("users", doc! { "username": "alice" })
            .await
            .unwrap();

        let found = store.find_one("users", id).await.unwrap().unwrap();
        assert_eq!(found.get_object_id("_id").unwrap(), id);
        assert_eq!(found.get_str("username").unwrap(), "alice");
    }

    #[tokio::test]
    async fn find_on_missing_document_returns_none() {
        let store = InMemoryStore::new();
        store
            .insert_one("users", doc! { "username": "alice" })
            .await
            .unwrap();

        assert!(store.find_one("users", ObjectId::new()).await.unwrap().is_none());
        assert!(store.find_one("posts", ObjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clones_share_underlying_data() {
        let store = InMemoryStore::new();
        let clone = store.clone();

        let id = clone
            .insert_one("users", doc! { "username": "alice" })
            .await
            .unwrap();

        assert!(store.find_one("users", id).await.unwrap().is_some());
    }
}
