//! Login, registration and password-reset submissions.
//!
//! These endpoints establish or change the cookie session that protected
//! pages later resolve. Payload shapes are owned by the server; see
//! [`super::types`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use super::error::SessionError;
use super::session::HttpSessionClient;
use super::transport::RawResponse;
use super::types::{AuthReply, LoginRequest, RegisterRequest, ResetPasswordRequest};
use crate::routes::AppRoute;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";

/// The three form submissions an auth page can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
    ResetPassword,
}

impl AuthAction {
    /// API path the form is posted to.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
            Self::ResetPassword => RESET_PASSWORD_PATH,
        }
    }

    /// Where the page navigates once the server accepts the submission.
    #[must_use]
    pub fn success_route(self) -> AppRoute {
        match self {
            Self::Login => AppRoute::Home,
            Self::Register | Self::ResetPassword => AppRoute::Login,
        }
    }

    /// Inline status text while the request is in flight.
    #[must_use]
    pub fn pending_message(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Register => "Creating account...",
            Self::ResetPassword => "Resetting password...",
        }
    }
}

impl HttpSessionClient {
    /// Submit credentials; on success the server sets the session cookie.
    ///
    /// # Errors
    ///
    /// [`SessionError::Rejected`] with the server's message for a non-success
    /// status, [`SessionError::Transport`] if no usable response arrived.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthReply, SessionError> {
        self.submit(AuthAction::Login, request).await
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// See [`HttpSessionClient::login`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthReply, SessionError> {
        self.submit(AuthAction::Register, request).await
    }

    /// Replace the password of the account named by email or username.
    ///
    /// # Errors
    ///
    /// See [`HttpSessionClient::login`].
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<AuthReply, SessionError> {
        self.submit(AuthAction::ResetPassword, request).await
    }

    async fn submit<B>(&self, action: AuthAction, body: &B) -> Result<AuthReply, SessionError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url(action.endpoint());
        let resp = self.transport.post_json(&url, body).await?;
        let result = decode_auth_reply(&resp);
        match &result {
            Ok(_) => log::info!("{action:?} accepted by server"),
            Err(e) => log::warn!("{action:?} failed [{}]: {e}", e.error_code()),
        }
        result
    }
}

pub(crate) fn decode_auth_reply(resp: &RawResponse) -> Result<AuthReply, SessionError> {
    let reply = serde_json::from_str::<AuthReply>(&resp.body);
    if resp.is_success() {
        return reply.map_err(|e| SessionError::Transport(format!("auth body decode failed: {e}")));
    }
    let message = reply
        .ok()
        .map(|r| r.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed (status {}).", resp.status));
    Err(SessionError::Rejected { status: resp.status, message })
}
