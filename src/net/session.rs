//! Session client: asks the identity endpoint who the current cookie session
//! belongs to.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is normalized into `Result<IdentityPayload, SessionError>`:
//! a non-success status is `NotAuthenticated`, anything that prevents reading
//! a JSON body is `Transport`. There are no retries; the caller decides.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::error::SessionError;
use super::transport::{RawResponse, Transport};
use super::types::IdentityPayload;
use crate::config::ClientConfig;

/// Source of the current session's identity.
///
/// Futures are `?Send`: in the browser they wrap `fetch` promises, which are
/// bound to the main thread.
#[async_trait(?Send)]
pub trait SessionApi {
    /// Issue one credentialed request to the identity endpoint.
    async fn current_identity(&self) -> Result<IdentityPayload, SessionError>;
}

/// HTTP implementation of [`SessionApi`], also used for the auth endpoints.
///
/// Cheap to clone; provided to the component tree through Leptos context.
#[derive(Clone, Debug)]
pub struct HttpSessionClient {
    pub(super) config: Arc<ClientConfig>,
    pub(super) transport: Transport,
}

impl HttpSessionClient {
    /// Build a client for the configured API origin.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] if the native HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, SessionError> {
        let transport = Transport::new(config.request_timeout)?;
        Ok(Self { config: Arc::new(config), transport })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl SessionApi for HttpSessionClient {
    async fn current_identity(&self) -> Result<IdentityPayload, SessionError> {
        let url = self.config.identity_url();
        log::debug!("fetching identity from {url}");
        let resp = self.transport.get(&url).await?;
        decode_identity(&resp)
    }
}

pub(crate) fn decode_identity(resp: &RawResponse) -> Result<IdentityPayload, SessionError> {
    if !resp.is_success() {
        return Err(SessionError::NotAuthenticated { status: resp.status });
    }
    serde_json::from_str(&resp.body)
        .map_err(|e| SessionError::Transport(format!("identity body decode failed: {e}")))
}
