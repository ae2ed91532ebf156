//! Authentication and API error types.

use thiserror::Error;

/// Failures from the session API or the session lifecycle around it.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("invalid e-mail/password combination")]
    InvalidCredentials,

    #[error("request rejected by the API: {message}")]
    Rejected { message: String },

    #[error("no active session")]
    NoActiveSession,

    #[error("network error: {message}")]
    Network { message: String },

    #[error("session storage failed: {0}")]
    Storage(#[from] super::StorageError),

    #[error("unexpected API response: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an unexpected-response error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the network rather than the API.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
