//! Sign-in use case implementation.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::dto::SignInForm;
use crate::application::services::validation::{self, FieldErrors};
use crate::application::services::{SessionManager, ToastQueue};
use crate::domain::entities::User;
use crate::domain::errors::AuthError;

/// Result of a sign-in attempt.
#[derive(Debug)]
pub enum SignInOutcome {
    /// Credentials accepted; the session is persisted and active.
    SignedIn(User),
    /// Form input failed validation; nothing left the client.
    Invalid(FieldErrors),
    /// The API or the network rejected the attempt; an error toast was
    /// queued.
    Failed(AuthError),
}

/// Handles the sign-in workflow.
#[derive(Clone)]
pub struct SignInUseCase {
    sessions: Arc<Mutex<SessionManager>>,
    toasts: Arc<Mutex<ToastQueue>>,
}

impl SignInUseCase {
    /// Creates a new sign-in use case.
    #[must_use]
    pub fn new(sessions: Arc<Mutex<SessionManager>>, toasts: Arc<Mutex<ToastQueue>>) -> Self {
        Self { sessions, toasts }
    }

    /// Executes sign-in with the raw form input.
    ///
    /// Validation failures are returned to the form untouched; an
    /// authentication failure queues an error toast before returning, per
    /// the error-reporting contract.
    pub async fn execute(&self, form: SignInForm) -> SignInOutcome {
        let credentials = match validation::validate_sign_in(&form) {
            Ok(credentials) => credentials,
            Err(errors) => {
                debug!(fields = errors.len(), "sign-in form failed validation");
                return SignInOutcome::Invalid(errors);
            }
        };

        let result = self.sessions.lock().await.sign_in(&credentials).await;

        match result {
            Ok(user) => SignInOutcome::SignedIn(user),
            Err(error) => {
                warn!(error = %error, "sign-in failed");
                self.toasts.lock().await.error(
                    "Authentication failed",
                    "Could not sign in, check your credentials and try again.",
                );
                SignInOutcome::Failed(error)
            }
        }
    }
}
