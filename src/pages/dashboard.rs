//! Dashboard: the default landing page for authenticated users.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Landing page with a greeting and quick links into the workspace.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || match auth.get().user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome back".to_owned(),
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>
            <div class="dashboard-page__quick-links">
                <a class="quick-link" href="/my-twgs">"My TWGs"</a>
                <a class="quick-link" href="/schedule">"Summit schedule"</a>
                <a class="quick-link" href="/actions">"Open actions"</a>
                <a class="quick-link" href="/notifications">"Notifications"</a>
            </div>
        </div>
    }
}
