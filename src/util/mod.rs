//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` holds the route-gating decision logic and wrapper component;
//! `routes` declares the protected-path table and navigation targets.

pub mod guard;
pub mod routes;
