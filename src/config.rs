//! Client configuration: API origin, identity endpoint, request timeout and
//! route-guard policy.
//!
//! DESIGN
//! ======
//! Values come from a key lookup so the same parser serves the native build
//! (process environment) and the WASM build (environment captured at compile
//! time, since a browser has no process environment).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::guard::GuardPolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_IDENTITY_PATH: &str = "/home";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Largest delay a browser timer honors; longer ones fire immediately.
pub const MAX_REQUEST_TIMEOUT_MS: u64 = 2_147_483_647;

pub const API_BASE_URL_KEY: &str = "VAULT_API_BASE_URL";
pub const IDENTITY_PATH_KEY: &str = "VAULT_IDENTITY_PATH";
pub const REQUEST_TIMEOUT_MS_KEY: &str = "VAULT_REQUEST_TIMEOUT_MS";
pub const GUARD_POLICY_KEY: &str = "VAULT_GUARD_POLICY";

/// Errors produced while parsing client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configuration key was set to a value that could not be used.
    #[error("invalid {key}={value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "E_CONFIG_INVALID",
        }
    }
}

/// Typed client configuration shared by the session client and the route
/// guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the session API, without a trailing slash.
    pub api_base_url: String,
    /// Path of the identity endpoint, always starting with `/`.
    pub identity_path: String,
    /// Upper bound for any single API request.
    pub request_timeout: Duration,
    /// What protected pages do when the server rejects the session.
    pub guard: GuardPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            identity_path: DEFAULT_IDENTITY_PATH.to_owned(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            guard: GuardPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from an arbitrary key lookup.
    ///
    /// Optional:
    /// - `VAULT_API_BASE_URL`: default `http://127.0.0.1:5000`
    /// - `VAULT_IDENTITY_PATH`: default `/home`
    /// - `VAULT_REQUEST_TIMEOUT_MS`: default 10000, between 1 and 2147483647
    /// - `VAULT_GUARD_POLICY`: `degrade` (default) or `redirect`
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a malformed URL, timeout or
    /// policy name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let api_base_url = match get(API_BASE_URL_KEY) {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let identity_path = get(IDENTITY_PATH_KEY)
            .map_or_else(|| DEFAULT_IDENTITY_PATH.to_owned(), |raw| normalize_path(&raw));
        let request_timeout = match get(REQUEST_TIMEOUT_MS_KEY) {
            Some(raw) => parse_timeout_ms(&raw)?,
            None => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        };
        let guard = match get(GUARD_POLICY_KEY) {
            Some(raw) => GuardPolicy::parse(&raw).ok_or(ConfigError::InvalidValue {
                key: GUARD_POLICY_KEY,
                value: raw,
                reason: "expected 'degrade' or 'redirect'",
            })?,
            None => GuardPolicy::default(),
        };

        Ok(Self { api_base_url, identity_path, request_timeout, guard })
    }

    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from variables captured when the crate was compiled.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let captured = match key {
                API_BASE_URL_KEY => option_env!("VAULT_API_BASE_URL"),
                IDENTITY_PATH_KEY => option_env!("VAULT_IDENTITY_PATH"),
                REQUEST_TIMEOUT_MS_KEY => option_env!("VAULT_REQUEST_TIMEOUT_MS"),
                GUARD_POLICY_KEY => option_env!("VAULT_GUARD_POLICY"),
                _ => None,
            };
            captured.map(str::to_owned)
        })
    }

    /// Load config for the current target, falling back to defaults when the
    /// configured values are unusable.
    #[must_use]
    pub fn load() -> Self {
        let parsed = if cfg!(target_arch = "wasm32") {
            Self::from_build_env()
        } else {
            Self::from_env()
        };
        parsed.unwrap_or_else(|e| {
            log::warn!("client config rejected ({}), using defaults: {e}", e.error_code());
            Self::default()
        })
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, normalize_path(path))
    }

    /// Absolute URL of the identity endpoint.
    #[must_use]
    pub fn identity_url(&self) -> String {
        self.url(&self.identity_path)
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidValue {
            key: API_BASE_URL_KEY,
            value: raw.to_owned(),
            reason: "expected an http(s) origin",
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout_ms(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(ms) if ms > MAX_REQUEST_TIMEOUT_MS => Err(ConfigError::InvalidValue {
            key: REQUEST_TIMEOUT_MS_KEY,
            value: raw.to_owned(),
            reason: "exceeds 2147483647 milliseconds",
        }),
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidValue {
            key: REQUEST_TIMEOUT_MS_KEY,
            value: raw.to_owned(),
            reason: "expected a positive number of milliseconds",
        }),
    }
}

fn normalize_path(raw: &str) -> String {
    if raw.starts_with('/') {
        raw.to_owned()
    } else {
        format!("/{raw}")
    }
}
