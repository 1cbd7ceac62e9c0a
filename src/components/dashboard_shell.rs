//! Shell chrome shared by the role dashboards.
//!
//! Dashboards render without the public layout; this shell supplies their
//! header (greeting from the resolved profile, sign-out) so the role pages
//! only provide their own sections.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::util::routes;

/// Dashboard frame with a title bar, profile greeting, and sign-out action.
#[component]
pub fn DashboardShell(
    /// Title shown in the shell header, e.g. `"Owner dashboard"`.
    title: &'static str,
    children: Children,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let greeting = move || {
        auth.get()
            .current_profile()
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| "there".to_owned())
    };

    let on_sign_out = move |_| {
        session::sign_out(auth);
        navigate(routes::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-shell">
            <header class="dashboard-shell__header">
                <span class="dashboard-shell__brand">"Rentboard"</span>
                <h1 class="dashboard-shell__title">{title}</h1>
                <div class="dashboard-shell__account">
                    <span class="dashboard-shell__greeting">
                        "Hi, " {greeting}
                    </span>
                    <button class="dashboard-shell__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </header>
            <main class="dashboard-shell__main">{children()}</main>
        </div>
    }
}
