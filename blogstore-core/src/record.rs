//! Core traits for record representation and storage-document conversion.
//!
//! This module provides the fundamental trait that all stored records must
//! implement, plus the extension trait that converts records to and from the
//! documents actually written to the store. Conversion is where identifier
//! normalization happens: identifier-typed fields travel as 24-hex strings in
//! record values and as native `ObjectId` references in storage documents.

use bson::{Bson, Document, de::deserialize_from_bson, ser::serialize_to_bson};
use serde::{Deserialize, Serialize};

use crate::{
    error::{StoreError, StoreResult},
    ident::{decode_external, encode_external},
};

/// The store's reserved self-identifier key.
///
/// Records never carry this key as a field name; the storage-document codec
/// remaps it to [`SELF_ID_FIELD`] on the way out and back on the way in.
pub const RESERVED_ID_KEY: &str = "_id";

/// The record-side field name of the self identifier.
pub const SELF_ID_FIELD: &str = "id";

/// Core trait that all records stored through the repository must implement.
///
/// Every record has an optional self identifier (absent until the record is
/// persisted, a 24-hex string afterwards) and names the collection it belongs
/// to. Records whose fields reference other records declare those field names
/// in [`reference_fields`](Record::reference_fields) so the storage-document
/// codec knows which string fields to re-encode as native references.
///
/// # Example
///
/// ```ignore
/// use blogstore_core::record::Record;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Comment {
///     #[serde(skip_serializing_if = "Option::is_none", default)]
///     pub id: Option<String>,
///     pub body: String,
///     pub post_id: String,
/// }
///
/// impl Record for Comment {
///     fn id(&self) -> Option<&str> {
///         self.id.as_deref()
///     }
///
///     fn set_id(&mut self, id: String) {
///         self.id = Some(id);
///     }
///
///     fn collection_name() -> &'static str {
///         "comments"
///     }
///
///     fn reference_fields() -> &'static [&'static str] {
///         &["post_id"]
///     }
/// }
/// ```
pub trait Record: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {
    /// Returns this record's self identifier, if it has been persisted.
    fn id(&self) -> Option<&str>;

    /// Sets this record's self identifier to the given external form.
    fn set_id(&mut self, id: String);

    /// Returns the name of the collection this record belongs to.
    ///
    /// This should be a static, lowercase identifier (e.g., "users", "posts").
    fn collection_name() -> &'static str;

    /// Field names holding references to other records, besides the self
    /// identifier. Defaults to none.
    fn reference_fields() -> &'static [&'static str] {
        &[]
    }
}

/// Extension trait converting records to and from storage documents.
///
/// Automatically implemented for all types that implement [`Record`].
pub trait RecordExt: Record {
    /// Converts this record to the document written to the store.
    ///
    /// The self-identifier field is dropped from the output; when
    /// `include_self_id` is true and the identifier is present, it is written
    /// under the store's reserved key as a native reference instead. Every
    /// declared reference field is re-encoded from its external string form
    /// to the native reference form. All other fields pass through unchanged,
    /// and an absent self identifier produces no key at all.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or an identifier field does
    /// not hold a well-formed external identifier.
    fn to_storage_document(&self, include_self_id: bool) -> StoreResult<Document>;

    /// Reconstructs a record from a document read back from the store.
    ///
    /// Every native-reference value in the document is converted to its
    /// external string form, and a value under the store's reserved
    /// self-identifier key is moved to the record's `id` field name.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting field mapping does not deserialize
    /// into the record type.
    fn from_storage_document(document: Document) -> StoreResult<Self>;
}

impl<R: Record> RecordExt for R {
    fn to_storage_document(&self, include_self_id: bool) -> StoreResult<Document> {
        let mut document = match serialize_to_bson(self)? {
            Bson::Document(document) => document,
            other => {
                return Err(StoreError::Serialization(format!(
                    "record serialized to a non-document value: {other:?}"
                )));
            }
        };

        // The self identifier never travels under its record field name.
        let self_id = document.remove(SELF_ID_FIELD);
        if include_self_id {
            if let Some(Bson::String(id)) = self_id {
                document.insert(RESERVED_ID_KEY, decode_external(&id)?);
            }
        }

        for field in Self::reference_fields() {
            match document.remove(*field) {
                Some(Bson::String(value)) => {
                    document.insert(*field, decode_external(&value)?);
                }
                Some(other) => {
                    document.insert(*field, other);
                }
                None => {}
            }
        }

        Ok(document)
    }

    fn from_storage_document(document: Document) -> StoreResult<Self> {
        let mut fields = Document::new();

        for (key, value) in document {
            let value = match value {
                Bson::ObjectId(id) => Bson::String(encode_external(&id)),
                other => other,
            };

            if key == RESERVED_ID_KEY {
                fields.insert(SELF_ID_FIELD, value);
            } else {
                fields.insert(key, value);
            }
        }

        Ok(deserialize_from_bson(Bson::Document(fields))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Post, User};

    const AUTHOR_ID: &str = "507f1f77bcf86cd799439011";
    const SELF_ID: &str = "507f191e810c19729de860ea";

    #[test]
    fn unpersisted_record_serializes_without_id_key() {
        let user = User::new("testuser", "test@example.com").unwrap();
        let document = user.to_storage_document(false).unwrap();

        assert!(!document.contains_key(RESERVED_ID_KEY));
        assert!(!document.contains_key(SELF_ID_FIELD));
        assert_eq!(document.get_str("username").unwrap(), "testuser");
        assert_eq!(document.get_str("email").unwrap(), "test@example.com");
    }

    #[test]
    fn self_id_moves_to_reserved_key_as_native_reference() {
        let mut user = User::new("testuser", "test@example.com").unwrap();
        user.set_id(SELF_ID.to_string());

        let document = user.to_storage_document(true).unwrap();

        assert!(!document.contains_key(SELF_ID_FIELD));
        let id = document.get_object_id(RESERVED_ID_KEY).unwrap();
        assert_eq!(id.to_hex(), SELF_ID);
    }

    #[test]
    fn self_id_is_dropped_when_not_requested() {
        let mut user = User::new("testuser", "test@example.com").unwrap();
        user.set_id(SELF_ID.to_string());

        let document = user.to_storage_document(false).unwrap();
        assert!(!document.contains_key(RESERVED_ID_KEY));
    }

    #[test]
    fn reference_fields_serialize_as_native_references() {
        let post = Post::new("Test", "Content", AUTHOR_ID).unwrap();
        let document = post.to_storage_document(false).unwrap();

        let author = document.get_object_id("author_id").unwrap();
        assert_eq!(author.to_hex(), AUTHOR_ID);
    }

    #[test]
    fn reserved_key_moves_back_to_id_field_as_string() {
        let mut user = User::new("testuser", "test@example.com").unwrap();
        user.set_id(SELF_ID.to_string());

        let document = user.to_storage_document(true).unwrap();
        let restored = User::from_storage_document(document).unwrap();

        assert_eq!(restored, user);
        assert_eq!(restored.id.as_deref(), Some(SELF_ID));
    }

    #[test]
    fn storage_round_trip_is_idempotent_for_posts() {
        let mut post = Post::new("Test Post", "This is a test post", AUTHOR_ID).unwrap();
        post.set_id(SELF_ID.to_string());

        let document = post.to_storage_document(true).unwrap();
        let restored = Post::from_storage_document(document.clone()).unwrap();
        assert_eq!(restored, post);

        let reserialized = restored.to_storage_document(true).unwrap();
        assert_eq!(reserialized, document);
    }
}
