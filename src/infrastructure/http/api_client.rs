//! GoBarber REST API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, multipart};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, ProfileBody, SessionBody, SessionResponse, UserPayload};
use crate::domain::entities::{Credentials, Session, User};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AvatarUpload, ProfileUpdate, SessionApiPort};

/// Default base URL of the scheduling backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:3333";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Scheduling backend API client.
pub struct GoBarberApiClient {
    client: Client,
    base_url: String,
}

impl GoBarberApiClient {
    /// Creates a new client with the default base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new() -> Result<Self, AuthError> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn map_send_error(e: &reqwest::Error) -> AuthError {
        if e.is_timeout() {
            AuthError::network("request timed out")
        } else if e.is_connect() {
            AuthError::network("failed to connect to the API")
        } else {
            AuthError::network(e.to_string())
        }
    }

    async fn error_message(status: StatusCode, response: reqwest::Response) -> String {
        match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        }
    }

    async fn handle_error_response(
        status: StatusCode,
        response: reqwest::Response,
    ) -> AuthError {
        let message = Self::error_message(status, response).await;

        match status {
            StatusCode::UNAUTHORIZED => AuthError::rejected("invalid or expired session"),
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN => AuthError::rejected(message),
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                AuthError::network("the API is temporarily unavailable")
            }
            _ => AuthError::unexpected(format!("unexpected response: {status} - {message}")),
        }
    }

    async fn parse_user(response: reqwest::Response) -> Result<User, AuthError> {
        let payload: UserPayload = response.json().await.map_err(|e| {
            warn!(error = %e, "failed to parse user response");
            AuthError::unexpected(format!("failed to parse response: {e}"))
        })?;

        Ok(payload.into())
    }
}

#[async_trait]
impl SessionApiPort for GoBarberApiClient {
    async fn create_session(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        debug!("creating session");

        let body = SessionBody {
            email: credentials.email(),
            password: credentials.password(),
        };

        let response = self
            .client
            .post(self.endpoint("sessions"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "failed to reach the sessions endpoint");
                Self::map_send_error(&e)
            })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let session: SessionResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "failed to parse session response");
            AuthError::unexpected(format!("failed to parse response: {e}"))
        })?;

        debug!("session created");
        Ok(Session::new(session.token, User::from(session.user)))
    }

    async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<User, AuthError> {
        debug!("updating profile");

        let response = self
            .client
            .put(self.endpoint("profile"))
            .bearer_auth(token)
            .json(&ProfileBody::from(update))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "failed to reach the profile endpoint");
                Self::map_send_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        Self::parse_user(response).await
    }

    async fn update_avatar(&self, token: &str, upload: AvatarUpload) -> Result<User, AuthError> {
        debug!(file_name = %upload.file_name, "uploading avatar");

        let part = multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = multipart::Form::new().part("avatar", part);

        let response = self
            .client
            .patch(self.endpoint("users/avatar"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "failed to reach the avatar endpoint");
                Self::map_send_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        Self::parse_user(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = GoBarberApiClient::with_base_url("http://localhost:3333/").unwrap();
        assert_eq!(client.endpoint("sessions"), "http://localhost:3333/sessions");
        assert_eq!(
            client.endpoint("users/avatar"),
            "http://localhost:3333/users/avatar"
        );
    }
}
