//! The record types stored by the blog data layer.
//!
//! Both types are constructed through validating constructors that check the
//! declared field constraints up front, before any store interaction. The
//! self identifier is always `None` on a freshly constructed record and is
//! assigned by the repository on create.

use serde::{Deserialize, Serialize};

use crate::{
    error::{StoreError, StoreResult},
    ident::decode_external,
    record::Record,
};

/// A registered user of the blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Self identifier; `None` until the record is persisted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
}

impl User {
    /// Creates an unpersisted user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRecord`] if `email` is not syntactically
    /// a valid email address.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> StoreResult<Self> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(StoreError::InvalidRecord(format!(
                "malformed email address: {email:?}"
            )));
        }

        Ok(Self {
            id: None,
            username: username.into(),
            email,
        })
    }
}

impl Record for User {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn collection_name() -> &'static str {
        "users"
    }
}

/// A blog post authored by a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Self identifier; `None` until the record is persisted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    /// External identifier of the authoring user. Required at construction;
    /// referential integrity is not enforced.
    pub author_id: String,
}

impl Post {
    /// Creates an unpersisted post referencing an author by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRecord`] if `author_id` is not a
    /// well-formed 24-hex identifier.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> StoreResult<Self> {
        let author_id = author_id.into();
        decode_external(&author_id)
            .map_err(|_| StoreError::InvalidRecord(format!("malformed author_id: {author_id:?}")))?;

        Ok(Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author_id,
        })
    }
}

impl Record for Post {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn collection_name() -> &'static str {
        "posts"
    }

    fn reference_fields() -> &'static [&'static str] {
        &["author_id"]
    }
}

// Lightweight syntactic check; full RFC compliance is not required here.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
        && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_identifier() {
        let user = User::new("testuser", "test@example.com").unwrap();
        assert_eq!(user.id, None);
        assert_eq!(user.username, "testuser");
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "no-at-sign", "@example.com", "user@", "user@nodot", "two@at@example.com", "spaced user@example.com"] {
            assert!(
                matches!(User::new("testuser", email), Err(StoreError::InvalidRecord(_))),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn post_requires_well_formed_author_reference() {
        let post = Post::new("Test", "Content", "507f1f77bcf86cd799439011").unwrap();
        assert_eq!(post.id, None);
        assert_eq!(post.author_id, "507f1f77bcf86cd799439011");

        assert!(matches!(
            Post::new("Test", "Content", "not-a-valid-id"),
            Err(StoreError::InvalidRecord(_))
        ));
    }
}
