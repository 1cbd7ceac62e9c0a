//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared rendering
//! to `components`. Protected pages assume the router has already applied
//! `RequireRole`.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payments;
pub mod register;
pub mod unauthorized;
