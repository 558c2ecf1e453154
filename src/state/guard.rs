//! Route guard for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages always render from their resolution state. The guard only
//! adds an optional redirect when the server says there is no session; it
//! never blocks rendering while resolution is in flight.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::identity::{ResolutionState, ViewMode};
use crate::net::error::FailureKind;
use crate::routes::AppRoute;

/// What a protected page does once the server rejects the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Render the anonymous fallback in place.
    #[default]
    Degrade,
    /// Navigate to the login page.
    RedirectToLogin,
}

impl GuardPolicy {
    /// Parse a config value (`degrade` or `redirect`, case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "degrade" => Some(Self::Degrade),
            "redirect" | "redirect_to_login" => Some(Self::RedirectToLogin),
            _ => None,
        }
    }
}

/// Outcome of applying the guard to a resolution state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision<'a> {
    Render(ViewMode<'a>),
    Redirect(AppRoute),
}

/// Decide between rendering and redirecting.
///
/// Only an explicit `NotAuthenticated` redirects; transport and malformed
/// failures say nothing about the session and still degrade.
#[must_use]
pub fn decide(policy: GuardPolicy, state: &ResolutionState) -> GuardDecision<'_> {
    match (policy, state) {
        (GuardPolicy::RedirectToLogin, ResolutionState::Failed(FailureKind::NotAuthenticated)) => {
            GuardDecision::Redirect(AppRoute::Login)
        }
        _ => GuardDecision::Render(state.view_mode()),
    }
}

/// Redirect target for a state under a policy, if any.
#[must_use]
pub fn redirect_target(policy: GuardPolicy, state: &ResolutionState) -> Option<AppRoute> {
    match decide(policy, state) {
        GuardDecision::Redirect(route) => Some(route),
        GuardDecision::Render(_) => None,
    }
}
