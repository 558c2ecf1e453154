//! # vault-client
//!
//! Leptos + WASM frontend for Vault: registration, login, password reset and
//! the session-gated Home, Search and Messages pages.
//!
//! This crate contains pages, components, application state, the route table,
//! and the session/auth HTTP client. Protected pages share one identity
//! resolver that asks the server who the session belongs to on every mount.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
