//! In-memory backend implementation for blogstore.
//!
//! This crate provides a `StoreBackend` that keeps documents in HashMaps
//! behind async-safe read-write locks. It behaves like the MongoDB backend
//! for the operations the repository uses (store-assigned identifiers,
//! native-reference lookup) and is intended for development and testing.

pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
