//! Convenient re-exports of commonly used types from blogstore.
//!
//! ```ignore
//! use blogstore::prelude::*;
//! ```

pub use blogstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
    ident::{decode_external, encode_external},
    model::{Post, User},
    record::{Record, RecordExt},
    repository::{RecordSet, Repository},
};
