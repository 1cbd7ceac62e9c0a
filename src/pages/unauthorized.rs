//! Access-denied page for authenticated sessions with the wrong role.
//!
//! The guard sends valid-but-unpermitted sessions here, never to login:
//! re-authenticating would not change the answer.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::routes;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let back_home = move || routes::dashboard_for(auth.get().role_resolution()).to_owned();

    view! {
        <div class="unauthorized-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view that page."</p>
            <p>
                <a href=back_home>"Back to your dashboard"</a>
            </p>
        </div>
    }
}
