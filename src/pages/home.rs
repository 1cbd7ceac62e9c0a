//! Public marketing landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Find your next home"</h1>
                <p>
                    "Browse rental listings, book viewings, and manage everything from one dashboard."
                </p>
                <p class="home-page__actions">
                    <a class="home-page__cta" href="/register">
                        "Get started"
                    </a>
                    <a href="/login">"Sign in"</a>
                </p>
            </section>
        </div>
    }
}
