//! Layout chrome shared by route groups.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router pairs every path with one of three chromes: public marketing
//! chrome, the centered auth-card chrome, or none (dashboards bring their
//! own shell via `DashboardShell`). Frames take children directly so the
//! catch-all not-found page can reuse the public chrome.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::routes;

/// Public chrome: top navigation and footer around marketing pages and the
/// not-found fallback.
#[component]
pub fn PublicFrame(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();

    let account_link = move || {
        let state = auth.get();
        if state.is_authenticated() {
            routes::dashboard_for(state.role_resolution()).to_owned()
        } else {
            routes::LOGIN_PATH.to_owned()
        }
    };
    let account_label = move || {
        if auth.get().is_authenticated() { "My dashboard" } else { "Sign in" }
    };

    view! {
        <div class="public-layout">
            <header class="public-layout__header">
                <a class="public-layout__brand" href="/">
                    "Rentboard"
                </a>
                <nav class="public-layout__nav">
                    <a href="/">"Home"</a>
                    <a href=account_link>{account_label}</a>
                </nav>
            </header>
            <main class="public-layout__main">{children()}</main>
            <footer class="public-layout__footer">
                <p>"Rentboard: find, list, and manage rental homes."</p>
            </footer>
        </div>
    }
}

/// Auth chrome: a centered card with no site navigation, used for login and
/// registration.
#[component]
pub fn AuthFrame(children: Children) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__card">
                <a class="auth-layout__brand" href="/">
                    "Rentboard"
                </a>
                {children()}
            </div>
        </div>
    }
}
