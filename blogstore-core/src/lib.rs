//! Core of the blogstore record-mapping layer.
//!
//! This crate maps plain typed records onto documents in a MongoDB-style
//! store, normalizing identifiers between the 24-character hex string form
//! used by application code and the store's native `ObjectId` form:
//!
//! - **Identifier codec** ([`ident`]) - Conversion between external hex
//!   identifiers and native store references
//! - **Record traits** ([`record`]) - Core traits for defining records and
//!   converting them to/from storage documents
//! - **Record types** ([`model`]) - The `User` and `Post` record types
//! - **Backend abstraction** ([`backend`]) - Traits for implementing storage
//!   backends
//! - **Repository** ([`repository`]) - Create/read operations per record type
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use blogstore_core::{model::User, repository::Repository};
//!
//! let repository = Repository::new(backend);
//!
//! let user = User::new("alice", "alice@example.com")?;
//! let user = repository.create(user).await?;
//!
//! // `create` set the store-assigned identifier on the record.
//! assert!(user.id.is_some());
//! ```

pub mod backend;
pub mod error;
pub mod ident;
pub mod model;
pub mod record;
pub mod repository;
