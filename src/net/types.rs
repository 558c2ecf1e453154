//! Wire DTOs for the session API.
//!
//! DESIGN
//! ======
//! Field names follow what the server reads and writes, which is not uniform:
//! registration uses camelCase keys while password reset uses snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body returned by the identity endpoint on success.
///
/// The server historically answers with a greeting sentence such as
/// `"Welcome alice!"`; newer servers may also send the name directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityPayload {
    /// Human-readable greeting with the user's name as the second word.
    #[serde(default)]
    pub message: String,
    /// Structured display name, when the server provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Status envelope returned by the login, register and reset endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// `POST /login` body. `username` may also hold an email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirmed_password: String,
}

/// `POST /reset-password` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email_or_username: String,
    pub new_password: String,
    pub confirmed_password: String,
}
