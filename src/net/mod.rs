//! Networking modules for the identity/record provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` performs the HTTP calls and owns error translation; `types`
//! defines the wire schema. Nothing above `state::session` imports these.

pub mod provider;
pub mod types;
