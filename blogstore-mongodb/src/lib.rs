//! MongoDB backend implementation for blogstore.
//!
//! This crate provides a MongoDB-based implementation of the `StoreBackend`
//! trait over the async MongoDB driver. The repository uses exactly two
//! driver operations: `insert_one` (MongoDB assigns the `ObjectId`) and
//! `find_one` by `_id` equality.
//!
//! To use this backend, include the `mongodb` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blogstore = { version = "x.y.z", features = ["mongodb"] }
//! ```
//!
//! # Connection
//!
//! The backend is built from a MongoDB connection string and database name
//! through the builder pattern; connection pooling and timeouts are the
//! driver's, unmodified.
//!
//! # Example
//!
//! ```ignore
//! use blogstore::mongodb::MongoDbStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbStore::builder("mongodb://localhost:27017", "blog_database")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
