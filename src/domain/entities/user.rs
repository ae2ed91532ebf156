//! Account user entity.

use serde::{Deserialize, Serialize};

/// A registered account as returned by the scheduling API.
///
/// The serialized form of this type is the exact JSON written to the
/// persistent user key, so field names, field order, and the omission of an
/// absent `avatar_url` are part of the storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

impl User {
    /// Creates a user without an avatar.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Opaque unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Account e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Avatar URL, when one has been uploaded.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("user-0909", "test name", "teste@gmail.com");

        assert_eq!(user.id(), "user-0909");
        assert_eq!(user.name(), "test name");
        assert_eq!(user.email(), "teste@gmail.com");
        assert_eq!(user.avatar_url(), None);
    }

    #[test]
    fn test_serialized_shape_omits_missing_avatar() {
        let user = User::new("user-0909", "test name", "teste@gmail.com");
        let json = serde_json::to_string(&user).unwrap();

        assert_eq!(
            json,
            r#"{"id":"user-0909","name":"test name","email":"teste@gmail.com"}"#
        );
    }

    #[test]
    fn test_serialized_shape_with_avatar() {
        let user = User::new("user-0909", "test name", "teste@gmail.com").with_avatar_url("image");
        let json = serde_json::to_string(&user).unwrap();

        assert_eq!(
            json,
            r#"{"id":"user-0909","name":"test name","email":"teste@gmail.com","avatar_url":"image"}"#
        );
    }

    #[test]
    fn test_deserialize_without_avatar_field() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","name":"n","email":"e@x.com"}"#).unwrap();
        assert_eq!(user.avatar_url(), None);
    }
}
