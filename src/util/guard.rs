//! Route guard gating protected pages on session and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! `evaluate` is the whole decision surface: four outcomes, no error
//! channel. `RequireRole` applies the outcome — neutral placeholder while
//! the session check is in flight, silent redirect for denied access, and
//! children only for an authenticated, authorized session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::role::{Role, RoleResolution};
use crate::state::session::SessionState;
use crate::util::routes;

/// Per-navigation outcome for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session check in flight; render a neutral placeholder, never content
    /// or a redirect, to avoid redirect thrashing.
    Loading,
    /// No authenticated session (or profile resolution failed): go to login,
    /// preserving the requested path.
    RedirectToLogin,
    /// Valid session, wrong role: go to the access-denied page, not login.
    RedirectToUnauthorized,
    /// Authenticated and authorized; render the protected content.
    Render,
}

/// Decide the outcome for the current session against an allowed-role set.
///
/// Fails closed everywhere: a missing profile counts as unauthenticated, an
/// unrecognized role is denied, and an empty allowed set (a route table
/// configuration error) denies rather than granting by accident.
pub fn evaluate(state: &SessionState, allowed: &[Role]) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    if !state.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    match state.role_resolution() {
        None => GuardOutcome::RedirectToLogin,
        Some(RoleResolution::Granted(role)) if allowed.contains(&role) => GuardOutcome::Render,
        Some(_) => GuardOutcome::RedirectToUnauthorized,
    }
}

/// Decide the outcome for a route that needs a session but no particular
/// role (the generic dashboard). Accounts with the `Unauthorized` sentinel
/// still render here; it is where they are sent after sign-in.
pub fn evaluate_session(state: &SessionState) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    if state.is_authenticated() {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Wrapper component for protected routes.
///
/// Reads the shared session signal from context and re-evaluates on every
/// change, so a sign-out while the page is open redirects immediately.
/// Redirects are silent: they are normal access-control flow, not errors.
#[component]
pub fn RequireRole(
    /// Roles allowed to render the children. Declared statically per route.
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || match evaluate(&auth.get(), allowed) {
        GuardOutcome::RedirectToLogin => {
            let from = location.pathname.get_untracked();
            navigate(&routes::login_redirect(&from), NavigateOptions::default());
        }
        GuardOutcome::RedirectToUnauthorized => {
            navigate(routes::UNAUTHORIZED_PATH, NavigateOptions::default());
        }
        GuardOutcome::Loading | GuardOutcome::Render => {}
    });

    view! {
        <Show
            when=move || matches!(evaluate(&auth.get(), allowed), GuardOutcome::Render)
            fallback=|| {
                view! { <div class="route-guard__placeholder" aria-busy="true"></div> }
            }
        >
            {children()}
        </Show>
    }
}

/// Wrapper component for routes that only need an authenticated session.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if evaluate_session(&auth.get()) == GuardOutcome::RedirectToLogin {
            let from = location.pathname.get_untracked();
            navigate(&routes::login_redirect(&from), NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || evaluate_session(&auth.get()) == GuardOutcome::Render
            fallback=|| {
                view! { <div class="route-guard__placeholder" aria-busy="true"></div> }
            }
        >
            {children()}
        </Show>
    }
}
