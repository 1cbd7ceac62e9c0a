//! Catch-all page for unmatched paths, rendered inside the public layout.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist or has moved."</p>
            <p>
                <a href="/">"Back to the home page"</a>
            </p>
        </div>
    }
}
