//! Main blogstore crate providing the record-to-document mapping layer.
//!
//! This crate is the primary entry point for users of the blogstore library.
//! It re-exports the core types from the sub-crates and provides access to
//! the available storage backends.
//!
//! Application code works with plain typed records whose identifiers are
//! 24-character hex strings; the repository converts those identifiers to and
//! from the store's native `ObjectId` form on every create/read round-trip.
//!
//! # Quick Start
//!
//! ```ignore
//! use blogstore::{prelude::*, memory::InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> StoreResult<()> {
//!     let repository = Repository::new(InMemoryStore::new());
//!
//!     // Records are constructed without an identifier.
//!     let user = User::new("alice", "alice@example.com")?;
//!     let user = repository.create(user).await?;
//!
//!     // The store assigned one on insert, in external string form.
//!     let id = user.id.as_deref().unwrap();
//!     assert_eq!(id.len(), 24);
//!
//!     // A persisted record is referencable by another record.
//!     let post = Post::new("Hello", "First post", id)?;
//!     let post = repository.create(post).await?;
//!
//!     // Lookup is by external identifier; absence is `None`, not an error.
//!     let fetched: Option<Post> = repository.get(post.id.as_deref().unwrap()).await?;
//!     assert!(fetched.is_some());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Fast in-memory storage for development and testing
//! - [`mongodb`] - Persistent MongoDB backend (requires the `mongodb` feature)

pub mod prelude;

pub use blogstore_core::{backend, error, ident, model, record, repository};

// Re-export BSON types for convenience
pub use bson;

/// In-memory storage backend implementations.
pub mod memory {
    pub use blogstore_memory::{InMemoryStore, InMemoryStoreBuilder};
}

/// MongoDB storage backend implementations.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use blogstore_mongodb::{MongoDbStore, MongoDbStoreBuilder};
}
