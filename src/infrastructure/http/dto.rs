//! Wire formats for the scheduling API.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::domain::ports::ProfileUpdate;

/// `POST sessions` request body.
#[derive(Serialize)]
pub struct SessionBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST sessions` response structure.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Authenticated user.
    pub user: UserPayload,
}

/// User object as the API returns it.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        let user = Self::new(payload.id, payload.name, payload.email);
        match payload.avatar_url {
            Some(avatar_url) => user.with_avatar_url(avatar_url),
            None => user,
        }
    }
}

/// `PUT profile` request body; the password block is only sent when the
/// user is rotating their password.
#[derive(Serialize)]
pub struct ProfileBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<&'a str>,
}

impl<'a> From<&'a ProfileUpdate> for ProfileBody<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        let change = update.password_change.as_ref();
        Self {
            name: &update.name,
            email: &update.email,
            old_password: change.map(|c| c.old_password.as_str()),
            password: change.map(|c| c.password.as_str()),
            password_confirmation: change.map(|c| c.password_confirmation.as_str()),
        }
    }
}

/// API error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the backend.
    pub message: String,
}
