//! Role dashboards and the generic fallback dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role dashboard is a protected route (see `util::routes::ROUTE_TABLE`)
//! wrapped in `RequireRole` by the router, so these components can assume an
//! authorized session. The generic dashboard is the landing page for
//! sessions whose role did not resolve; it is deliberately unprivileged.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;

/// Placeholder section card used by all dashboards. The marketplace content
/// behind these (listings, leads, viewings) is out of scope here.
#[component]
fn SectionCard(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="dashboard-card">
            <h2 class="dashboard-card__title">{title}</h2>
            <p class="dashboard-card__blurb">{blurb}</p>
        </section>
    }
}

/// Landing page for authenticated sessions without a recognized role.
#[component]
pub fn GenericDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell title="Dashboard">
            <SectionCard
                title="Welcome"
                blurb="Your account has no dashboard role assigned yet. Contact support if this persists."
            />
        </DashboardShell>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell title="Admin dashboard">
            <SectionCard title="Accounts" blurb="Manage owner, agent, and tenant accounts."/>
            <SectionCard title="Listings" blurb="Review and moderate marketplace listings."/>
            <SectionCard title="Payments" blurb="Oversee owner and tenant payment requests."/>
            <p class="dashboard-links">
                <a href="/admin/deleted-documents">"Deleted documents"</a>
                <a href="/owner/payments">"Owner payments"</a>
                <a href="/tenant/payments">"Tenant payments"</a>
            </p>
        </DashboardShell>
    }
}

#[component]
pub fn OwnerDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell title="Owner dashboard">
            <SectionCard title="My listings" blurb="Properties you have listed for rent."/>
            <SectionCard title="Leads" blurb="Enquiries from prospective tenants."/>
            <SectionCard title="Viewings" blurb="Upcoming viewing appointments."/>
            <p class="dashboard-links">
                <a href="/owner/payments">"Payment requests"</a>
            </p>
        </DashboardShell>
    }
}

#[component]
pub fn AgentDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell title="Agent dashboard">
            <SectionCard title="Assigned listings" blurb="Properties you represent."/>
            <SectionCard title="Leads" blurb="Enquiries routed to you."/>
            <SectionCard title="Viewings" blurb="Your viewing calendar."/>
        </DashboardShell>
    }
}

#[component]
pub fn TenantDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell title="Tenant dashboard">
            <SectionCard title="Saved homes" blurb="Listings you bookmarked."/>
            <SectionCard title="Viewings" blurb="Viewings you requested."/>
            <SectionCard title="Payments" blurb="Rent and deposit requests."/>
            <p class="dashboard-links">
                <a href="/tenant/payments">"Payment requests"</a>
            </p>
        </DashboardShell>
    }
}
