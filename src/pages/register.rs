//! Registration page: account + profile creation with a role choice.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::routes;

/// Roles offered in the sign-up form. Admin accounts are provisioned by
/// operators, not self-served.
const SELF_SERVE_ROLES: &[&str] = &["tenant", "owner", "agent"];

const MIN_PASSWORD_LEN: usize = 6;

/// Validated registration form values, in submit order.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistrationInput {
    display_name: String,
    email: String,
    password: String,
    role: String,
}

/// Trim and check the registration form fields. Role membership in the
/// closed set is enforced later by the session store (`InvalidRole`); this
/// only rejects an unselected role.
fn validate_registration_input(
    display_name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<RegistrationInput, &'static str> {
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err("Enter a display name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    let role = role.trim();
    if role.is_empty() {
        return Err("Choose an account type.");
    }
    Ok(RegistrationInput {
        display_name: display_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role: role.to_owned(),
    })
}

/// Human label for a role option, e.g. `"tenant"` -> `"Tenant"`.
fn role_option_label(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("tenant".to_owned());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

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
        let input = match validate_registration_input(
            &display_name.get(),
            &email.get(),
            &password.get(),
            &role.get(),
        ) {
            Ok(input) => input,
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
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::session::sign_up(
                    auth,
                    &input.email,
                    &input.password,
                    &input.role,
                    &input.display_name,
                )
                .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(profile) => {
                        let dest = routes::sign_in_destination(None, Some(profile.role));
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
        <div class="register-page">
            <h1>"Create an account"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Display name"
                    prop:value=move || display_name.get()
                    on:input=move |ev| display_name.set(event_target_value(&ev))
                />
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
                    placeholder="Password (6+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <select
                    class="auth-form__select"
                    prop:value=move || role.get()
                    on:change=move |ev| role.set(event_target_value(&ev))
                >
                    {SELF_SERVE_ROLES
                        .iter()
                        .map(|r| view! { <option value=*r>{role_option_label(r)}</option> })
                        .collect_view()}
                </select>
                <button class="auth-form__button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <Show when=move || !notice.get().is_empty()>
                <p class="auth-form__notice" role="alert">
                    {move || notice.get()}
                </p>
            </Show>
            <p class="auth-form__switch">
                "Already have an account? " <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
