//! Session lifecycle management.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Credentials, Session, User};
use crate::domain::errors::{AuthError, StorageError};
use crate::domain::ports::{KeyValueStorePort, SessionApiPort};

/// Persistent store key holding the raw session token.
pub const TOKEN_KEY: &str = "@Gobarber:token";

/// Persistent store key holding the JSON-serialized user.
pub const USER_KEY: &str = "@Gobarber:user";

/// Single source of truth for who is signed in.
///
/// The manager restores any persisted session on construction and keeps the
/// persistent store in sync on every mutation. Only this type writes the
/// session keys.
pub struct SessionManager {
    api: Arc<dyn SessionApiPort>,
    store: Arc<dyn KeyValueStorePort>,
    token: Option<String>,
    user: Option<User>,
}

impl SessionManager {
    /// Creates a manager, restoring any persisted session.
    ///
    /// Missing or malformed stored data is treated as "no session"; restore
    /// failures are logged and never surfaced.
    #[must_use]
    pub fn new(api: Arc<dyn SessionApiPort>, store: Arc<dyn KeyValueStorePort>) -> Self {
        let (token, user) = Self::restore(store.as_ref());
        Self {
            api,
            store,
            token,
            user,
        }
    }

    fn restore(store: &dyn KeyValueStorePort) -> (Option<String>, Option<User>) {
        let token = store.get(TOKEN_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "failed to read stored token");
            None
        });
        let raw_user = store.get(USER_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "failed to read stored user");
            None
        });

        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            debug!("no persisted session found");
            return (None, None);
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                info!(user_id = %user.id(), "restored persisted session");
                (Some(token), Some(user))
            }
            Err(e) => {
                warn!(error = %e, "stored user is malformed, discarding persisted session");
                (None, None)
            }
        }
    }

    /// Exchanges credentials for a session and persists it.
    ///
    /// On success both store keys are written before the in-memory state is
    /// replaced. On failure nothing is written, the current state is
    /// unchanged, and the error propagates verbatim; no retries are
    /// performed here.
    ///
    /// Overlapping calls are not guarded against: a late response from an
    /// abandoned call still wins (last-write-wins). Callers must not issue a
    /// second sign-in while one is in flight.
    ///
    /// # Errors
    /// Returns the API error on rejection or network failure, or a storage
    /// error if persisting the session fails.
    pub async fn sign_in(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        debug!(email = %credentials.email(), "signing in");

        let session = self.api.create_session(credentials).await?;

        let serialized = serde_json::to_string(session.user()).map_err(StorageError::from)?;
        self.store.set(TOKEN_KEY, session.token())?;
        self.store.set(USER_KEY, &serialized)?;

        let (token, user) = session.into_parts();
        info!(user_id = %user.id(), "signed in");
        self.token = Some(token);
        self.user = Some(user.clone());

        Ok(user)
    }

    /// Clears the session from memory and the persistent store.
    ///
    /// Both keys are always removed, whether or not they were present, so
    /// calling this twice observes the same result as calling it once.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written; in-memory state is
    /// cleared regardless.
    pub fn sign_out(&mut self) -> Result<(), StorageError> {
        debug!("signing out");

        let token_removed = self.store.remove(TOKEN_KEY);
        let user_removed = self.store.remove(USER_KEY);

        self.token = None;
        self.user = None;

        token_removed.and(user_removed)
    }

    /// Replaces the current user in memory and in the persistent store. The
    /// token is untouched.
    ///
    /// This does not require an active session: with no token the store is
    /// still written and `current_user` returns the new user, while
    /// `current_session` stays empty. The mismatch is logged.
    ///
    /// # Errors
    /// Returns an error if the user cannot be serialized or stored.
    pub fn update_user(&mut self, user: User) -> Result<(), StorageError> {
        if self.token.is_none() {
            warn!(user_id = %user.id(), "updating user without an active session");
        }

        let serialized = serde_json::to_string(&user)?;
        self.store.set(USER_KEY, &serialized)?;
        self.user = Some(user);

        Ok(())
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the active session when both token and user are present.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        match (&self.token, &self.user) {
            (Some(token), Some(user)) => Some(Session::new(token.clone(), user.clone())),
            _ => None,
        }
    }
}
