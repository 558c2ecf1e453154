//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `identity` holds the per-view resolution state and the name extraction
//! rule, `resolver` drives one resolution per mount, `guard` decides between
//! rendering and redirecting, and `forms` validates auth form input. None of
//! these depend on a browser, so they are tested natively.

pub mod forms;
pub mod guard;
pub mod identity;
pub mod resolver;
