//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one route table is active. Protected paths are wrapped in the
//! route guard with the allowed-role slices from `util::routes`, so the
//! table below and `ROUTE_TABLE` describe the same authorization surface.
//! The session signal is provided here and initialized once at mount; no
//! page re-fetches the session on its own.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::{AuthFrame, PublicFrame};
use crate::pages::admin::DeletedDocumentsPage;
use crate::pages::dashboard::{
    AdminDashboardPage, AgentDashboardPage, GenericDashboardPage, OwnerDashboardPage,
    TenantDashboardPage,
};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::payments::{OwnerPaymentsPage, TenantPaymentsPage};
use crate::pages::register::RegisterPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::state::session::{self, SessionState};
use crate::util::guard::{RequireRole, RequireSession};
use crate::util::routes;

/// Root application component.
///
/// Provides the shared session context, kicks off the one-time session
/// bootstrap, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(SessionState::default());
    provide_context(auth);
    session::init_session(auth);

    view! {
        <Title text="Rentboard"/>

        <Router>
            <Routes fallback=|| {
                view! {
                    <PublicFrame>
                        <NotFoundPage/>
                    </PublicFrame>
                }
            }>
                // Public chrome.
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <PublicFrame>
                                <HomePage/>
                            </PublicFrame>
                        }
                    }
                />
                <Route
                    path=StaticSegment("unauthorized")
                    view=|| {
                        view! {
                            <PublicFrame>
                                <UnauthorizedPage/>
                            </PublicFrame>
                        }
                    }
                />

                // Auth chrome.
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <AuthFrame>
                                <LoginPage/>
                            </AuthFrame>
                        }
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| {
                        view! {
                            <AuthFrame>
                                <RegisterPage/>
                            </AuthFrame>
                        }
                    }
                />

                // Dashboards (no chrome; pages bring their own shell).
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RequireSession>
                                <GenericDashboardPage/>
                            </RequireSession>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("admin"))
                    view=|| {
                        view! {
                            <RequireRole allowed=routes::ADMIN_ONLY>
                                <AdminDashboardPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("owner"))
                    view=|| {
                        view! {
                            <RequireRole allowed=routes::OWNER_ONLY>
                                <OwnerDashboardPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("agent"))
                    view=|| {
                        view! {
                            <RequireRole allowed=routes::AGENT_ONLY>
                                <AgentDashboardPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("tenant"))
                    view=|| {
                        view! {
                            <RequireRole allowed=routes::TENANT_ONLY>
                                <TenantDashboardPage/>
                            </RequireRole>
                        }
                    }
                />

                // Payments and admin utilities.
                <Route
                    path=(StaticSegment("owner"), StaticSegment("payments"))
                    view=|| {
                        view! {
                            <RequireRole allowed=routes::OWNER_OR_ADMIN>
                                <OwnerPaymentsPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("tenant"), StaticSegment("payments"))
                    view=|| {
                        view! {
                            <RequireRole allowed=routes::TENANT_OR_ADMIN>
                                <TenantPaymentsPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("deleted-documents"))
                    view=|| {
                        view! {
                            <RequireRole allowed=routes::ADMIN_ONLY>
                                <DeletedDocumentsPage/>
                            </RequireRole>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
