//! Networking modules for the session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` resolves who the current cookie session belongs to, `auth`
//! submits login/registration/reset forms, `types` defines the wire schema,
//! and `error` the failure taxonomy both share. `transport` hides whether the
//! request goes through the browser's fetch or a native HTTP client.

pub mod auth;
pub mod error;
pub mod session;
#[cfg(all(test, feature = "native", not(feature = "hydrate")))]
pub(crate) mod test_server;
mod transport;
pub mod types;
