//! Profile update use case implementation.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::dto::ProfileForm;
use crate::application::services::validation::{self, FieldErrors};
use crate::application::services::{SessionManager, ToastQueue};
use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionApiPort;

/// Result of a profile update attempt.
#[derive(Debug)]
pub enum UpdateProfileOutcome {
    /// Profile saved; the session user was replaced and a success toast was
    /// queued.
    Updated(User),
    /// Form input failed validation; nothing left the client.
    Invalid(FieldErrors),
    /// The update could not be applied. API and storage failures queue an
    /// error toast; a missing session does not (a routed page cannot reach
    /// the profile form without one).
    Failed(AuthError),
}

/// Handles the profile update workflow.
#[derive(Clone)]
pub struct UpdateProfileUseCase {
    api: Arc<dyn SessionApiPort>,
    sessions: Arc<Mutex<SessionManager>>,
    toasts: Arc<Mutex<ToastQueue>>,
}

impl UpdateProfileUseCase {
    /// Creates a new profile update use case.
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

    /// Executes the profile update with the raw form input.
    ///
    /// Requires an active session; the session token authorizes the API
    /// call and the returned user replaces the current one.
    pub async fn execute(&self, form: ProfileForm) -> UpdateProfileOutcome {
        let update = match validation::validate_profile(&form) {
            Ok(update) => update,
            Err(errors) => {
                debug!(fields = errors.len(), "profile form failed validation");
                return UpdateProfileOutcome::Invalid(errors);
            }
        };

        let Some(session) = self.sessions.lock().await.current_session() else {
            warn!("profile update attempted without an active session");
            return UpdateProfileOutcome::Failed(AuthError::NoActiveSession);
        };

        match self.api.update_profile(session.token(), &update).await {
            Ok(user) => {
                if let Err(error) = self.sessions.lock().await.update_user(user.clone()) {
                    warn!(error = %error, "failed to persist updated user");
                    self.toasts.lock().await.error(
                        "Update failed",
                        "Could not update your profile, try again.",
                    );
                    return UpdateProfileOutcome::Failed(error.into());
                }

                self.toasts.lock().await.success(
                    "Profile updated",
                    "Your profile information was updated successfully.",
                );
                UpdateProfileOutcome::Updated(user)
            }
            Err(error) => {
                warn!(error = %error, "profile update failed");
                self.toasts.lock().await.error(
                    "Update failed",
                    "Could not update your profile, try again.",
                );
                UpdateProfileOutcome::Failed(error)
            }
        }
    }
}
