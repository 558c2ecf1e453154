//! Auth form input and its client-side checks.
//!
//! Checks are limited to presence and password confirmation; the server
//! remains the authority on everything else.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{LoginRequest, RegisterRequest, ResetPasswordRequest};

/// Reason a form was not submitted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter your {0}.")]
    Missing(&'static str),

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Login form. The username field also accepts an email address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// [`FormError::Missing`] for the first empty field.
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        Ok(LoginRequest {
            username: required_text(&self.username, "username or email")?,
            password: required_secret(&self.password, "password")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirmed_password: String,
}

impl RegistrationForm {
    /// # Errors
    ///
    /// [`FormError::Missing`] for the first empty field, then
    /// [`FormError::PasswordMismatch`].
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let request = RegisterRequest {
            first_name: required_text(&self.first_name, "first name")?,
            last_name: required_text(&self.last_name, "last name")?,
            email: required_text(&self.email, "email")?,
            username: required_text(&self.username, "username")?,
            password: required_secret(&self.password, "password")?,
            confirmed_password: required_secret(&self.confirmed_password, "password confirmation")?,
        };
        confirm(&request.password, &request.confirmed_password)?;
        Ok(request)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub email_or_username: String,
    pub new_password: String,
    pub confirmed_password: String,
}

impl ResetPasswordForm {
    /// # Errors
    ///
    /// [`FormError::Missing`] for the first empty field, then
    /// [`FormError::PasswordMismatch`].
    pub fn validate(&self) -> Result<ResetPasswordRequest, FormError> {
        let request = ResetPasswordRequest {
            email_or_username: required_text(&self.email_or_username, "email or username")?,
            new_password: required_secret(&self.new_password, "new password")?,
            confirmed_password: required_secret(&self.confirmed_password, "password confirmation")?,
        };
        confirm(&request.new_password, &request.confirmed_password)?;
        Ok(request)
    }
}

fn required_text(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(trimmed.to_owned())
}

// Blank counts as missing, but a present password is sent verbatim.
fn required_secret(value: &str, field: &'static str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(value.to_owned())
}

fn confirm(password: &str, confirmation: &str) -> Result<(), FormError> {
    if password == confirmation {
        Ok(())
    } else {
        Err(FormError::PasswordMismatch)
    }
}
