//! Application wiring.
//!
//! The session manager and toast queue are owned here and handed to the use
//! cases as explicit shared references; nothing in the crate reaches for
//! ambient globals, and only the session manager writes session state.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::ProjectDirs;
use tokio::sync::Mutex;

use crate::application::services::{SessionManager, ToastQueue};
use crate::application::use_cases::{SignInUseCase, UpdateAvatarUseCase, UpdateProfileUseCase};
use crate::domain::ports::{KeyValueStorePort, SessionApiPort};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http::GoBarberApiClient;
use crate::infrastructure::storage::FileKeyValueStore;

/// Assembled client core: shared services plus the use cases the pages
/// drive.
pub struct App {
    /// Session state holder; single writer of the session keys.
    pub sessions: Arc<Mutex<SessionManager>>,
    /// Shared toast queue.
    pub toasts: Arc<Mutex<ToastQueue>>,
    /// Sign-in workflow.
    pub sign_in: SignInUseCase,
    /// Profile update workflow.
    pub update_profile: UpdateProfileUseCase,
    /// Avatar upload workflow.
    pub update_avatar: UpdateAvatarUseCase,
}

impl App {
    /// Wires the core from the given adapters. Any persisted session is
    /// restored immediately.
    #[must_use]
    pub fn new(api: Arc<dyn SessionApiPort>, store: Arc<dyn KeyValueStorePort>) -> Self {
        let sessions = Arc::new(Mutex::new(SessionManager::new(api.clone(), store)));
        let toasts = Arc::new(Mutex::new(ToastQueue::default()));

        Self {
            sign_in: SignInUseCase::new(sessions.clone(), toasts.clone()),
            update_profile: UpdateProfileUseCase::new(
                api.clone(),
                sessions.clone(),
                toasts.clone(),
            ),
            update_avatar: UpdateAvatarUseCase::new(api, sessions.clone(), toasts.clone()),
            sessions,
            toasts,
        }
    }

    /// Wires the core with the real REST client and file-backed store.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the store
    /// directory cannot be opened.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api = GoBarberApiClient::with_base_url(&config.api_base_url)
            .wrap_err("failed to create API client")?;

        let data_dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from("com", "gobarber", "gobarber")
                .ok_or_else(|| eyre!("failed to determine data directory"))?
                .data_dir()
                .to_path_buf(),
        };
        let store =
            FileKeyValueStore::open(data_dir).wrap_err("failed to open persistent store")?;

        Ok(Self::new(Arc::new(api), Arc::new(store)))
    }
}
