//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::require_auth::RequireAuth;
use crate::pages::{
    actions::ActionTrackerPage, assistant::AssistantPage, dashboard::DashboardPage,
    documents::DocumentLibraryPage, forgot_password::ForgotPasswordPage,
    integrations::IntegrationsPage, knowledge_base::KnowledgeBasePage, login::LoginPage,
    my_twgs::MyTwgsPage, notifications::NotificationCenterPage, pipeline::DealPipelinePage,
    profile::UserProfilePage, register::RegisterPage, reset_password::ResetPasswordPage,
    schedule::SchedulePage, twgs::TwgDirectoryPage, workspace::WorkspacePage,
};
use crate::routes;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth state context (seeded from the previous session's
/// stored token), kicks off the profile fetch for a restored session, and
/// declares the route tree: public auth pages, guarded top-level pages,
/// and a guarded shell hosting the nested workspace pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore());
    provide_context(auth);

    // A token survived the reload but the profile did not; fetch it so
    // role-gated routes and the shell have a user record to work with.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::net::types::ApiError;

        let state = auth.get_untracked();
        if let (Some(token), None) = (state.token, state.user) {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_current_user(&token).await {
                    Ok(user) => auth.update(|s| s.set_credentials(user, token)),
                    // Dead token: drop the session rather than loop on it.
                    Err(ApiError::Rejected(_)) => auth.update(AuthState::logout),
                    // Transient failure: keep the token, stay signed out of
                    // role-gated views until a later fetch succeeds.
                    Err(_) => {}
                }
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/summit-client.css"/>
        <Title text="Summit Workspace"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // Public routes
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>

                // Root redirects to the default landing page
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Redirect path=routes::DASHBOARD/> }
                />

                // Guarded top-level pages
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("twgs")
                    view=|| view! { <RequireAuth><TwgDirectoryPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("documents")
                    view=|| view! { <RequireAuth><DocumentLibraryPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("notifications")
                    view=|| view! { <RequireAuth><NotificationCenterPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("integrations")
                    view=|| {
                        view! {
                            <RequireAuth allowed_roles=routes::INTEGRATIONS_ROLES>
                                <IntegrationsPage/>
                            </RequireAuth>
                        }
                    }
                />

                // Guarded shell with nested workspace pages; the inner
                // deal-pipeline guard composes with the shell's.
                <ParentRoute
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><DashboardLayout/></RequireAuth> }
                >
                    <Route path=StaticSegment("my-twgs") view=MyTwgsPage/>
                    <Route
                        path=(StaticSegment("workspace"), ParamSegment("id"))
                        view=WorkspacePage
                    />
                    <Route path=StaticSegment("schedule") view=SchedulePage/>
                    <Route path=StaticSegment("knowledge-base") view=KnowledgeBasePage/>
                    <Route
                        path=StaticSegment("deal-pipeline")
                        view=|| {
                            view! {
                                <RequireAuth allowed_roles=routes::DEAL_PIPELINE_ROLES>
                                    <DealPipelinePage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route path=StaticSegment("actions") view=ActionTrackerPage/>
                    <Route path=StaticSegment("profile") view=UserProfilePage/>
                    <Route path=StaticSegment("assistant") view=AssistantPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
