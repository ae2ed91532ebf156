//! Session API port definition.

use std::fmt;

use async_trait::async_trait;

use crate::domain::entities::{Credentials, Session, User};
use crate::domain::errors::AuthError;

/// Profile fields submitted to the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: String,
    /// New e-mail address.
    pub email: String,
    /// Password rotation, when the user asked for one.
    pub password_change: Option<PasswordChange>,
}

/// Password rotation data; requires the current password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordChange {
    /// Current password.
    pub old_password: String,
    /// New password.
    pub password: String,
    /// Confirmation of the new password.
    pub password_confirmation: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("old_password", &"<redacted>")
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}

/// Avatar image upload.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    /// Original file name, forwarded as the multipart file name.
    pub file_name: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// Port for the scheduling backend's REST API.
#[async_trait]
pub trait SessionApiPort: Send + Sync {
    /// Exchanges credentials for a token and user via `POST sessions`.
    async fn create_session(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Updates profile data via `PUT profile` and returns the updated user.
    async fn update_profile(&self, token: &str, update: &ProfileUpdate)
    -> Result<User, AuthError>;

    /// Uploads a new avatar via `PATCH users/avatar` and returns the updated
    /// user.
    async fn update_avatar(&self, token: &str, upload: AvatarUpload) -> Result<User, AuthError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Mock session API for testing.
    ///
    /// Succeeds with a configured session, or rejects everything when built
    /// with [`MockSessionApi::rejecting`].
    pub struct MockSessionApi {
        session: Option<Session>,
        profile_user: Option<User>,
        create_session_calls: AtomicUsize,
    }

    impl MockSessionApi {
        /// Creates a mock that grants the given session.
        pub fn with_session(session: Session) -> Self {
            Self {
                session: Some(session),
                profile_user: None,
                create_session_calls: AtomicUsize::new(0),
            }
        }

        /// Creates a mock that rejects every call.
        pub fn rejecting() -> Self {
            Self {
                session: None,
                profile_user: None,
                create_session_calls: AtomicUsize::new(0),
            }
        }

        /// Sets the user returned by profile and avatar updates.
        pub fn with_profile_user(mut self, user: User) -> Self {
            self.profile_user = Some(user);
            self
        }

        /// Number of `create_session` calls observed.
        pub fn create_session_calls(&self) -> usize {
            self.create_session_calls.load(Ordering::SeqCst)
        }

        fn updated_user(&self) -> Result<User, AuthError> {
            self.profile_user
                .clone()
                .ok_or(AuthError::InvalidCredentials)
        }
    }

    #[async_trait]
    impl SessionApiPort for MockSessionApi {
        async fn create_session(&self, _credentials: &Credentials) -> Result<Session, AuthError> {
            self.create_session_calls.fetch_add(1, Ordering::SeqCst);
            self.session.clone().ok_or(AuthError::InvalidCredentials)
        }

        async fn update_profile(
            &self,
            _token: &str,
            _update: &ProfileUpdate,
        ) -> Result<User, AuthError> {
            self.updated_user()
        }

        async fn update_avatar(
            &self,
            _token: &str,
            _upload: AvatarUpload,
        ) -> Result<User, AuthError> {
            self.updated_user()
        }
    }
}
