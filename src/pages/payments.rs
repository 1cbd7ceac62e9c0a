//! Payment-request placeholder pages.
//!
//! These exist to keep the protected route surface complete; the payment
//! CRUD flows themselves live outside this slice of the app.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;

/// Payment requests issued by an owner (owner and admin access).
#[component]
pub fn OwnerPaymentsPage() -> impl IntoView {
    view! {
        <DashboardShell title="Owner payments">
            <section class="dashboard-card">
                <h2 class="dashboard-card__title">"Payment requests"</h2>
                <p class="dashboard-card__blurb">
                    "Requests you have sent to tenants will appear here."
                </p>
            </section>
        </DashboardShell>
    }
}

/// Payment requests addressed to a tenant (tenant and admin access).
#[component]
pub fn TenantPaymentsPage() -> impl IntoView {
    view! {
        <DashboardShell title="Tenant payments">
            <section class="dashboard-card">
                <h2 class="dashboard-card__title">"Payment requests"</h2>
                <p class="dashboard-card__blurb">
                    "Rent and deposit requests addressed to you will appear here."
                </p>
            </section>
        </DashboardShell>
    }
}
