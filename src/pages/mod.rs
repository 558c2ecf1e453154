//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Auth pages (`login`, `register`, `reset_password`) own their form state and
//! submission. Protected pages (`home`, `search`, `messages`) only supply a
//! body; identity resolution and the guard live in
//! `components::protected::ProtectedShell`.

pub mod home;
pub mod login;
pub mod messages;
pub mod register;
pub mod reset_password;
pub mod search;
