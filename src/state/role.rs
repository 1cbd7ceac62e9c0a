//! Closed role set and fail-closed role resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authorization decision in the app flows through `resolve_role`. The
//! provider stores roles as free-form strings; this module is the single
//! place where those strings become typed. Anything outside the closed set
//! resolves to the `Unauthorized` sentinel, never to a privileged default.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::{Deserialize, Serialize};

/// Account role governing dashboard and payments access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Owner,
    Agent,
    Tenant,
}

impl Role {
    /// The full closed set, in display order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Owner, Role::Agent, Role::Tenant];

    /// Canonical lowercase name as stored in profile records.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Agent => "agent",
            Role::Tenant => "tenant",
        }
    }

    /// Parse a raw role string. Whitespace is trimmed and ASCII case is
    /// ignored; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "owner" => Some(Role::Owner),
            "agent" => Some(Role::Agent),
            "tenant" => Some(Role::Tenant),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a profile's raw role string.
///
/// `Unauthorized` is a sentinel, not an error: the account exists and is
/// authenticated, but it holds no role the app recognizes, so the guard must
/// deny every protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleResolution {
    Granted(Role),
    Unauthorized,
}

impl RoleResolution {
    /// The granted role, if any.
    pub fn role(self) -> Option<Role> {
        match self {
            RoleResolution::Granted(role) => Some(role),
            RoleResolution::Unauthorized => None,
        }
    }
}

/// Resolve a raw role string from a profile record.
///
/// Fails closed: missing, malformed, or out-of-set values (including strings
/// like `"superadmin"` that merely contain a known role name) all yield
/// `Unauthorized`.
pub fn resolve_role(raw: &str) -> RoleResolution {
    Role::parse(raw).map_or(RoleResolution::Unauthorized, RoleResolution::Granted)
}
