//! Authenticated session entity.

use std::fmt;

use super::User;

/// Pairing of an authentication token and the user it authenticates.
///
/// Token and user always travel together; a session is created whole on
/// sign-in or restore and destroyed whole on sign-out.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    /// Creates a session from a token and its user.
    #[must_use]
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Raw bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Authenticated user.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Consumes the session and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (String, User) {
        (self.token, self.user)
    }

    /// Returns a masked token for display.
    #[must_use]
    pub fn masked_token(&self) -> String {
        if self.token.len() <= 10 {
            return "*".repeat(self.token.len());
        }

        let visible_prefix = &self.token[..4];
        let visible_suffix = &self.token[self.token.len() - 4..];
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.masked_token())
            .field("user", &self.user)
            .finish()
    }
}
