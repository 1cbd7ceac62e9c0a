//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single source of truth for authentication; `role` turns
//! raw provider role strings into the closed typed set.

pub mod role;
pub mod session;
