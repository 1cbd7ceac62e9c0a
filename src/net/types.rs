//! Wire DTOs for the hosted identity/record provider boundary.
//!
//! DESIGN
//! ======
//! These types mirror the provider's JSON payloads exactly so serde does the
//! structural validation. Anything the provider sends that does not fit these
//! shapes is rejected at the `net::provider` boundary and never reaches page
//! components as a loosely-typed value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Opaque external identity (provider-assigned id string).
    pub id: String,
    /// Email the account was registered with.
    pub email: String,
}

/// A profile row from the provider's record store, keyed by identity.
///
/// `role` stays a raw string here; `state::role::resolve_role` is the only
/// place it becomes typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Identity this profile belongs to (matches `AccountRecord::id`).
    pub id: String,
    /// Raw role string as stored by the provider.
    pub role: String,
    /// Human-facing display name.
    pub display_name: String,
}

/// Error body the provider returns on failed auth calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderErrorBody {
    /// Machine-readable error code, e.g. `"invalid_credentials"`.
    #[serde(default)]
    pub error: String,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for creating a profile row after sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProfileRecord {
    pub id: String,
    pub role: String,
    pub display_name: String,
}
