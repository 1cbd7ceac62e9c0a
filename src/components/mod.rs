//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome around route content while reading shared state
//! from Leptos context providers; pages own route-scoped orchestration.

pub mod dashboard_shell;
pub mod layout;
