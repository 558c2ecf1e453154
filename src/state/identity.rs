#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::error::{FailureKind, SessionError};
use crate::net::types::IdentityPayload;

/// The authenticated user as far as the client knows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
}

impl Identity {
    /// Extract the display name from an identity payload.
    ///
    /// A non-blank structured `username` wins. Otherwise the greeting is split
    /// on whitespace and the second word is taken as-is, punctuation included
    /// (`"Welcome alice!"` gives `"alice!"`).
    ///
    /// # Errors
    ///
    /// [`SessionError::Malformed`] when neither source yields a name.
    pub fn from_payload(payload: &IdentityPayload) -> Result<Self, SessionError> {
        if let Some(name) = payload.username.as_deref().filter(|n| !n.trim().is_empty()) {
            return Ok(Self { display_name: name.to_owned() });
        }
        payload
            .message
            .split_whitespace()
            .nth(1)
            .map(|name| Self { display_name: name.to_owned() })
            .ok_or_else(|| SessionError::Malformed(format!("no name in greeting {:?}", payload.message)))
    }
}

/// Progress of one view's identity lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResolutionState {
    #[default]
    Unresolved,
    Resolved(Identity),
    Failed(FailureKind),
}

impl ResolutionState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Resolved(identity) => Some(identity),
            Self::Unresolved | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode<'_> {
        match self {
            Self::Unresolved => ViewMode::Placeholder,
            Self::Resolved(identity) => ViewMode::Personalized(identity),
            Self::Failed(_) => ViewMode::Fallback,
        }
    }
}

/// How a protected page renders for a given resolution state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode<'a> {
    /// Lookup in flight: nothing identity-dependent.
    Placeholder,
    /// Lookup succeeded.
    Personalized(&'a Identity),
    /// Lookup failed: anonymous content.
    Fallback,
}

impl ViewMode<'_> {
    /// Page heading for this mode; `None` while still resolving.
    #[must_use]
    pub fn greeting(self) -> Option<String> {
        match self {
            Self::Placeholder => None,
            Self::Personalized(identity) => Some(format!("Welcome, {}", identity.display_name)),
            Self::Fallback => Some("Welcome".to_owned()),
        }
    }
}
