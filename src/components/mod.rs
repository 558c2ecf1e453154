//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected` wraps every session-gated page in the same identity resolution
//! and guard; `auth_card` holds the inputs and submit plumbing shared by the
//! login, registration and reset pages.

pub mod auth_card;
pub mod protected;
