//! Login page: email + password sign-in with post-login resumption.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard redirects here with the originally requested path in a `from`
//! query parameter; a successful sign-in resumes it (when safe) or lands on
//! the role's dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionState;
use crate::util::routes;

/// Trim and check the sign-in form fields.
fn validate_credentials_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// An already-authenticated visitor has no business on the login page.
fn should_redirect_authed(state: &SessionState) -> bool {
    !state.loading && state.is_authenticated()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed-in visitors go straight to their dashboard. Suppressed while a
    // submit is in flight: its handler owns the destination (`from` path).
    let navigate_authed = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_authed(&state) && !busy.get_untracked() {
            navigate_authed(
                routes::dashboard_for(state.role_resolution()),
                NavigateOptions::default(),
            );
        }
    });

    // Liveness flag: a sign-in completing after this page is gone must not
    // trigger a navigation side effect.
    #[cfg(feature = "csr")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "csr")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    notice.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        notice.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let from = query.get_untracked().get("from");
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                let result =
                    crate::state::session::sign_in(auth, &email_value, &password_value).await;
                // The page may have been navigated away from while the
                // provider call was in flight.
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(profile) => {
                        let dest =
                            routes::sign_in_destination(from.as_deref(), Some(profile.role));
                        navigate(&dest, NavigateOptions::default());
                    }
                    Err(err) => {
                        notice.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-form__button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <Show when=move || !notice.get().is_empty()>
                <p class="auth-form__notice" role="alert">
                    {move || notice.get()}
                </p>
            </Show>
            <p class="auth-form__switch">
                "New to Rentboard? " <a href="/register">"Create an account"</a>
            </p>
        </div>
    }
}
