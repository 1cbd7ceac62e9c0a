use super::*;
use crate::state::role::{Role, RoleResolution};

fn session_for(identity: &str) -> Session {
    Session {
        identity: identity.to_owned(),
        email: format!("{identity}@example.com"),
        authenticated: true,
    }
}

fn profile_for(identity: &str, role: Role) -> Profile {
    Profile {
        identity: identity.to_owned(),
        role: RoleResolution::Granted(role),
        display_name: "Test User".to_owned(),
    }
}

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.current_session().is_none());
    assert!(state.current_profile().is_none());
}

#[test]
fn completed_sign_in_authenticates() {
    let mut state = SessionState::default();
    let token = state.begin_request();
    assert!(state.apply_sign_in(token, session_for("u1"), profile_for("u1", Role::Owner)));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role_resolution(), Some(RoleResolution::Granted(Role::Owner)));
}

#[test]
fn sign_out_is_idempotent() {
    let mut state = SessionState::default();
    let token = state.begin_request();
    state.apply_sign_in(token, session_for("u1"), profile_for("u1", Role::Tenant));

    state.apply_sign_out();
    let after_once = (state.session.clone(), state.profile.clone(), state.loading);
    state.apply_sign_out();
    let after_twice = (state.session.clone(), state.profile.clone(), state.loading);

    assert_eq!(after_once, after_twice);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn stale_sign_in_after_sign_out_is_discarded() {
    let mut state = SessionState::default();
    // Sign-in issued, then sign-out resolves before the network call does.
    let token = state.begin_request();
    state.apply_sign_out();

    let applied = state.apply_sign_in(token, session_for("u1"), profile_for("u1", Role::Admin));
    assert!(!applied);
    assert!(!state.is_authenticated());
    assert!(state.current_profile().is_none());
}

#[test]
fn most_recently_requested_sign_in_wins_regardless_of_completion_order() {
    let mut state = SessionState::default();
    let first = state.begin_request();
    let second = state.begin_request();

    // Second request's completion arrives first and sticks.
    assert!(state.apply_sign_in(second, session_for("u2"), profile_for("u2", Role::Agent)));
    // First request's late completion must not overwrite it.
    assert!(!state.apply_sign_in(first, session_for("u1"), profile_for("u1", Role::Admin)));

    assert_eq!(state.current_session().map(|s| s.identity.as_str()), Some("u2"));
    assert_eq!(state.role_resolution(), Some(RoleResolution::Granted(Role::Agent)));
}

#[test]
fn stale_failure_does_not_clear_newer_session() {
    let mut state = SessionState::default();
    let stale = state.begin_request();
    let current = state.begin_request();
    state.apply_sign_in(current, session_for("u2"), profile_for("u2", Role::Owner));

    assert!(!state.apply_auth_failure(stale));
    assert!(state.is_authenticated());
}

#[test]
fn auth_failure_leaves_state_signed_out_and_settled() {
    let mut state = SessionState::default();
    let token = state.begin_request();
    assert!(state.apply_auth_failure(token));
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn profile_from_record_requires_matching_identity() {
    let record = crate::net::types::ProfileRecord {
        id: "u1".to_owned(),
        role: "owner".to_owned(),
        display_name: "Ada".to_owned(),
    };
    let profile = Profile::from_record("u1", &record).unwrap();
    assert_eq!(profile.role, RoleResolution::Granted(Role::Owner));
    assert_eq!(profile.display_name, "Ada");

    assert_eq!(
        Profile::from_record("someone-else", &record),
        Err(AuthError::ProfileResolutionFailure)
    );
    assert_eq!(Profile::from_record("", &record), Err(AuthError::ProfileResolutionFailure));
}

#[test]
fn profile_from_record_keeps_unknown_role_as_unauthorized() {
    let record = crate::net::types::ProfileRecord {
        id: "u1".to_owned(),
        role: "superadmin".to_owned(),
        display_name: "Eve".to_owned(),
    };
    let profile = Profile::from_record("u1", &record).unwrap();
    assert_eq!(profile.role, RoleResolution::Unauthorized);
}

#[test]
fn validate_requested_role_accepts_closed_set_only() {
    assert_eq!(validate_requested_role("owner"), Ok(Role::Owner));
    assert_eq!(validate_requested_role(" Tenant "), Ok(Role::Tenant));
    assert_eq!(
        validate_requested_role("superadmin"),
        Err(AuthError::InvalidRole("superadmin".to_owned()))
    );
    assert_eq!(validate_requested_role(""), Err(AuthError::InvalidRole(String::new())));
}

#[test]
fn auth_errors_have_human_readable_messages() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password.");
    assert!(AuthError::InvalidRole("boss".to_owned()).to_string().contains("boss"));
    assert!(AuthError::Provider("rate limited".to_owned()).to_string().contains("rate limited"));
}
