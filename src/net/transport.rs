//! HTTP transport behind the session client.
//!
//! Client-side (hydrate): `gloo-net` fetches with `credentials: include`, so
//! the browser attaches the session cookie even cross-origin.
//! Native (`native` feature): `reqwest` with a cookie store standing in for
//! the browser's cookie jar.
//! Neither: every request fails with a transport error.
//!
//! Both real transports enforce the configured request timeout.

#![allow(clippy::unused_async)]

use std::time::Duration;

use serde::Serialize;

use super::error::SessionError;

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(any(feature = "hydrate", feature = "native"))]
fn timed_out(timeout: Duration) -> SessionError {
    SessionError::Transport(format!("request timed out after {}ms", timeout.as_millis()))
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    timeout: Duration,
}

#[cfg(feature = "hydrate")]
impl Transport {
    pub(crate) fn new(timeout: Duration) -> Result<Self, SessionError> {
        Ok(Self { timeout })
    }

    pub(crate) async fn get(&self, url: &str) -> Result<RawResponse, SessionError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let request = Request::get(url).credentials(RequestCredentials::Include);
        self.with_timeout(async move {
            let resp = request
                .send()
                .await
                .map_err(|e| SessionError::Transport(e.to_string()))?;
            read_response(resp).await
        })
        .await
    }

    pub(crate) async fn post_json<B>(&self, url: &str, body: &B) -> Result<RawResponse, SessionError>
    where
        B: Serialize + ?Sized,
    {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let request = Request::post(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| SessionError::Transport(format!("request encode failed: {e}")))?;
        self.with_timeout(async move {
            let resp = request
                .send()
                .await
                .map_err(|e| SessionError::Transport(e.to_string()))?;
            read_response(resp).await
        })
        .await
    }

    async fn with_timeout<F>(&self, fut: F) -> Result<RawResponse, SessionError>
    where
        F: std::future::Future<Output = Result<RawResponse, SessionError>>,
    {
        use futures::future::{Either, select};

        let fut = std::pin::pin!(fut);
        let timer = gloo_timers::future::sleep(self.timeout);
        match select(fut, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(timed_out(self.timeout)),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<RawResponse, SessionError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| SessionError::Transport(format!("body read failed: {e}")))?;
    Ok(RawResponse { status, body })
}

#[cfg(all(feature = "native", not(feature = "hydrate")))]
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    timeout: Duration,
}

#[cfg(all(feature = "native", not(feature = "hydrate")))]
impl Transport {
    pub(crate) fn new(timeout: Duration) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| SessionError::Transport(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http, timeout })
    }

    pub(crate) async fn get(&self, url: &str) -> Result<RawResponse, SessionError> {
        let resp = self.http.get(url).send().await.map_err(|e| self.request_error(&e))?;
        self.read_response(resp).await
    }

    pub(crate) async fn post_json<B>(&self, url: &str, body: &B) -> Result<RawResponse, SessionError>
    where
        B: Serialize + ?Sized,
    {
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.request_error(&e))?;
        self.read_response(resp).await
    }

    async fn read_response(&self, resp: reqwest::Response) -> Result<RawResponse, SessionError> {
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| self.request_error(&e))?;
        Ok(RawResponse { status, body })
    }

    fn request_error(&self, err: &reqwest::Error) -> SessionError {
        if err.is_timeout() {
            timed_out(self.timeout)
        } else {
            SessionError::Transport(err.to_string())
        }
    }
}

#[cfg(not(any(feature = "hydrate", feature = "native")))]
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    timeout: Duration,
}

#[cfg(not(any(feature = "hydrate", feature = "native")))]
impl Transport {
    pub(crate) fn new(timeout: Duration) -> Result<Self, SessionError> {
        Ok(Self { timeout })
    }

    pub(crate) async fn get(&self, url: &str) -> Result<RawResponse, SessionError> {
        let _ = (url, self.timeout);
        Err(SessionError::Transport("no HTTP transport in this build".to_owned()))
    }

    pub(crate) async fn post_json<B>(&self, url: &str, body: &B) -> Result<RawResponse, SessionError>
    where
        B: Serialize + ?Sized,
    {
        let _ = (url, body, self.timeout);
        Err(SessionError::Transport("no HTTP transport in this build".to_owned()))
    }
}
