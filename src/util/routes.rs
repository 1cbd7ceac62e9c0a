//! Static route authorization table and post-auth navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! One table declares which roles may enter each protected path; the router
//! wires the same slices into `RequireRole`, and login/register use the
//! landing map to send a fresh session to its dashboard. Keeping the table
//! here makes the authorization surface auditable in one screenful.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::role::{Role, RoleResolution};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const GENERIC_DASHBOARD_PATH: &str = "/dashboard";

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const OWNER_ONLY: &[Role] = &[Role::Owner];
pub const AGENT_ONLY: &[Role] = &[Role::Agent];
pub const TENANT_ONLY: &[Role] = &[Role::Tenant];
pub const OWNER_OR_ADMIN: &[Role] = &[Role::Owner, Role::Admin];
pub const TENANT_OR_ADMIN: &[Role] = &[Role::Tenant, Role::Admin];

/// Every protected path with its allowed-role set. Slices must be non-empty;
/// the guard treats an empty slice as a configuration error and denies.
pub const ROUTE_TABLE: &[(&str, &[Role])] = &[
    ("/dashboard/admin", ADMIN_ONLY),
    ("/dashboard/owner", OWNER_ONLY),
    ("/dashboard/agent", AGENT_ONLY),
    ("/dashboard/tenant", TENANT_ONLY),
    ("/owner/payments", OWNER_OR_ADMIN),
    ("/tenant/payments", TENANT_OR_ADMIN),
    ("/admin/deleted-documents", ADMIN_ONLY),
];

/// Allowed roles for a protected path, or `None` for public paths.
pub fn allowed_roles(path: &str) -> Option<&'static [Role]> {
    ROUTE_TABLE.iter().find(|(p, _)| *p == path).map(|(_, roles)| *roles)
}

/// Fixed role-to-landing-page map applied after sign-in/up. Accounts with no
/// profile or an unrecognized role land on the generic dashboard.
pub fn dashboard_for(resolution: Option<RoleResolution>) -> &'static str {
    match resolution.and_then(RoleResolution::role) {
        Some(Role::Admin) => "/dashboard/admin",
        Some(Role::Owner) => "/dashboard/owner",
        Some(Role::Agent) => "/dashboard/agent",
        Some(Role::Tenant) => "/dashboard/tenant",
        None => GENERIC_DASHBOARD_PATH,
    }
}

/// Login URL preserving the originally requested path in a `from` query
/// parameter so a successful sign-in can return the user there.
pub fn login_redirect(from: &str) -> String {
    format!("{LOGIN_PATH}?from={}", encode_query_value(from))
}

/// Destination after a successful sign-in/up: the preserved `from` path when
/// it is a safe in-app path, otherwise the role's dashboard.
pub fn sign_in_destination(from: Option<&str>, resolution: Option<RoleResolution>) -> String {
    match from {
        Some(path) if is_safe_return_path(path) => path.to_owned(),
        _ => dashboard_for(resolution).to_owned(),
    }
}

/// Only same-app absolute paths may be resumed; anything else (external
/// URLs, scheme-relative `//host`, the login page itself) is ignored.
fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && path != LOGIN_PATH
}

/// Percent-encode a query value. Covers the reserved characters that can
/// appear in a path; unreserved ASCII passes through.
fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
