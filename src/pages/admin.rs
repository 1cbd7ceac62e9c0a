//! Admin-only utility pages.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;

/// Soft-deleted document recovery (admin access only).
#[component]
pub fn DeletedDocumentsPage() -> impl IntoView {
    view! {
        <DashboardShell title="Deleted documents">
            <section class="dashboard-card">
                <h2 class="dashboard-card__title">"Recently deleted"</h2>
                <p class="dashboard-card__blurb">
                    "Soft-deleted listings, leads, and viewing records can be restored here."
                </p>
            </section>
        </DashboardShell>
    }
}
