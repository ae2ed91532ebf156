//! Avatar upload use case implementation.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::application::services::{SessionManager, ToastQueue};
use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AvatarUpload, SessionApiPort};

/// Handles the avatar upload workflow.
#[derive(Clone)]
pub struct UpdateAvatarUseCase {
    api: Arc<dyn SessionApiPort>,
    sessions: Arc<Mutex<SessionManager>>,
    toasts: Arc<Mutex<ToastQueue>>,
}

impl UpdateAvatarUseCase {
    /// Creates a new avatar upload use case.
    #[must_use]
    pub fn new(
        api: Arc<dyn SessionApiPort>,
        sessions: Arc<Mutex<SessionManager>>,
        toasts: Arc<Mutex<ToastQueue>>,
    ) -> Self {
        Self {
            api,
            sessions,
            toasts,
        }
    }

    /// Uploads the avatar and replaces the session user with the API's
    /// response.
    ///
    /// # Errors
    /// Returns `NoActiveSession` without a signed-in user, or the API error
    /// when the upload fails.
    pub async fn execute(&self, upload: AvatarUpload) -> Result<User, AuthError> {
        let Some(session) = self.sessions.lock().await.current_session() else {
            warn!("avatar upload attempted without an active session");
            return Err(AuthError::NoActiveSession);
        };

        let user = self.api.update_avatar(session.token(), upload).await?;

        self.sessions.lock().await.update_user(user.clone())?;
        info!(user_id = %user.id(), "avatar updated");

        self.toasts
            .lock()
            .await
            .success("Avatar updated", "Your avatar was updated successfully.");

        Ok(user)
    }
}
