use super::*;
use crate::state::session::{Profile, Session, SessionState};
use crate::util::routes::ROUTE_TABLE;

fn loading_state() -> SessionState {
    SessionState::default()
}

fn signed_out_state() -> SessionState {
    let mut state = SessionState::default();
    state.apply_sign_out();
    state
}

fn signed_in_state(role: RoleResolution) -> SessionState {
    let mut state = SessionState::default();
    let token = state.begin_request();
    let session = Session {
        identity: "u1".to_owned(),
        email: "u1@example.com".to_owned(),
        authenticated: true,
    };
    let profile =
        Profile { identity: "u1".to_owned(), role, display_name: "Test".to_owned() };
    state.apply_sign_in(token, session, profile);
    state
}

#[test]
fn loading_session_renders_placeholder_not_redirect() {
    assert_eq!(evaluate(&loading_state(), &[Role::Admin]), GuardOutcome::Loading);
}

#[test]
fn unauthenticated_requests_redirect_to_login_on_every_protected_route() {
    let state = signed_out_state();
    for (_, allowed) in ROUTE_TABLE {
        assert_eq!(evaluate(&state, allowed), GuardOutcome::RedirectToLogin);
    }
}

#[test]
fn authorized_role_renders() {
    let state = signed_in_state(RoleResolution::Granted(Role::Owner));
    assert_eq!(evaluate(&state, &[Role::Owner]), GuardOutcome::Render);
    assert_eq!(evaluate(&state, &[Role::Owner, Role::Admin]), GuardOutcome::Render);
}

#[test]
fn wrong_role_redirects_to_unauthorized_never_login() {
    // Every role outside a route's allowed set is denied, for every route.
    for (_, allowed) in ROUTE_TABLE {
        for role in Role::ALL {
            let state = signed_in_state(RoleResolution::Granted(role));
            let expected = if allowed.contains(&role) {
                GuardOutcome::Render
            } else {
                GuardOutcome::RedirectToUnauthorized
            };
            assert_eq!(evaluate(&state, allowed), expected);
        }
    }
}

#[test]
fn unauthorized_sentinel_is_denied_everywhere() {
    let state = signed_in_state(RoleResolution::Unauthorized);
    for (_, allowed) in ROUTE_TABLE {
        assert_eq!(evaluate(&state, allowed), GuardOutcome::RedirectToUnauthorized);
    }
}

#[test]
fn authenticated_session_without_profile_is_treated_as_unauthenticated() {
    let mut state = signed_in_state(RoleResolution::Granted(Role::Admin));
    state.profile = None;
    assert_eq!(evaluate(&state, &[Role::Admin]), GuardOutcome::RedirectToLogin);
}

#[test]
fn empty_allowed_set_denies_instead_of_granting() {
    let state = signed_in_state(RoleResolution::Granted(Role::Admin));
    assert_eq!(evaluate(&state, &[]), GuardOutcome::RedirectToUnauthorized);
}

#[test]
fn owner_signup_scenario_reaches_owner_dashboard_only() {
    // sign-up(role=owner) then /dashboard/owner renders, /dashboard/admin is
    // denied without touching the login flow.
    let state = signed_in_state(RoleResolution::Granted(Role::Owner));
    let owner_routes = crate::util::routes::allowed_roles("/dashboard/owner").unwrap();
    let admin_routes = crate::util::routes::allowed_roles("/dashboard/admin").unwrap();
    assert_eq!(evaluate(&state, owner_routes), GuardOutcome::Render);
    assert_eq!(evaluate(&state, admin_routes), GuardOutcome::RedirectToUnauthorized);
}

#[test]
fn session_guard_admits_any_authenticated_account() {
    // The generic dashboard is where unresolved-role sessions land, so the
    // sentinel must render there rather than bouncing to /unauthorized.
    assert_eq!(evaluate_session(&loading_state()), GuardOutcome::Loading);
    assert_eq!(evaluate_session(&signed_out_state()), GuardOutcome::RedirectToLogin);
    assert_eq!(
        evaluate_session(&signed_in_state(RoleResolution::Unauthorized)),
        GuardOutcome::Render
    );
    assert_eq!(
        evaluate_session(&signed_in_state(RoleResolution::Granted(Role::Tenant))),
        GuardOutcome::Render
    );
}

#[test]
fn sign_out_while_page_open_flips_outcome_to_login_redirect() {
    let mut state = signed_in_state(RoleResolution::Granted(Role::Tenant));
    let tenant_routes = crate::util::routes::allowed_roles("/tenant/payments").unwrap();
    assert_eq!(evaluate(&state, tenant_routes), GuardOutcome::Render);
    state.apply_sign_out();
    assert_eq!(evaluate(&state, tenant_routes), GuardOutcome::RedirectToLogin);
}
