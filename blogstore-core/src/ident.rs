//! Identifier codec between external and native reference forms.
//!
//! Application code identifies records by 24-character hexadecimal strings.
//! The store identifies documents by its native [`ObjectId`] reference type.
//! This module converts between the two forms, losslessly in both directions.

use bson::oid::ObjectId;

use crate::error::{StoreError, StoreResult};

/// Decodes an external 24-hex-character identifier into a native reference.
///
/// # Errors
///
/// Returns [`StoreError::InvalidId`] if the value is not exactly 24
/// hexadecimal characters.
pub fn decode_external(value: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(value)
        .map_err(|_| StoreError::InvalidId(format!("not a 24-hex identifier: {value:?}")))
}

/// Encodes a native reference as its external 24-hex-character string form.
///
/// Total: never fails for a well-formed reference, and the output always
/// decodes back to the same reference.
pub fn encode_external(id: &ObjectId) -> String {
    id.to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_well_formed_identifiers() {
        for value in ["507f1f77bcf86cd799439011", "000000000000000000000000", "ffffffffffffffffffffffff"] {
            let id = decode_external(value).unwrap();
            assert_eq!(encode_external(&id), value);
        }
    }

    #[test]
    fn encodes_to_24_hex_characters() {
        let external = encode_external(&ObjectId::new());
        assert_eq!(external.len(), 24);
        assert!(external.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for value in ["not-a-valid-id", "", "507f1f77bcf86cd79943901", "507f1f77bcf86cd7994390111", "507f1f77bcf86cd79943901g"] {
            assert!(matches!(decode_external(value), Err(StoreError::InvalidId(_))));
        }
    }
}
