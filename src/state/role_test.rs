use super::*;

#[test]
fn parse_accepts_every_canonical_role() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn parse_ignores_case_and_whitespace() {
    assert_eq!(Role::parse("  Owner "), Some(Role::Owner));
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
}

#[test]
fn resolve_grants_known_roles() {
    assert_eq!(resolve_role("tenant"), RoleResolution::Granted(Role::Tenant));
    assert_eq!(resolve_role("agent"), RoleResolution::Granted(Role::Agent));
}

#[test]
fn resolve_fails_closed_on_unknown_role() {
    // "superadmin" contains "admin" but is not in the closed set.
    assert_eq!(resolve_role("superadmin"), RoleResolution::Unauthorized);
    assert_eq!(resolve_role("landlord"), RoleResolution::Unauthorized);
}

#[test]
fn resolve_fails_closed_on_empty_or_malformed_input() {
    assert_eq!(resolve_role(""), RoleResolution::Unauthorized);
    assert_eq!(resolve_role("   "), RoleResolution::Unauthorized);
    assert_eq!(resolve_role("admin tenant"), RoleResolution::Unauthorized);
}

#[test]
fn serde_round_trips_lowercase_names() {
    let json = serde_json::to_string(&Role::Tenant).unwrap();
    assert_eq!(json, "\"tenant\"");
    let back: Role = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Role::Tenant);
}

#[test]
fn resolution_exposes_granted_role() {
    assert_eq!(RoleResolution::Granted(Role::Owner).role(), Some(Role::Owner));
    assert_eq!(RoleResolution::Unauthorized.role(), None);
}
