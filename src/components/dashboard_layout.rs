//! Dashboard shell: sidebar navigation around an outlet for nested pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::AuthState;
use crate::util::dark_mode;

/// Common layout for the workspace pages: sidebar links, theme toggle,
/// sign-out, and an `<Outlet/>` hosting the active child route.
///
/// Links to role-restricted routes are hidden when the signed-in role is
/// outside the allow-list; the guard on the route itself still decides.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let dark = RwSignal::new(dark_mode::read_preference());
    Effect::new(move || dark_mode::apply(dark.get()));

    let user_name = move || {
        auth.get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Signed in".to_owned())
    };

    // Hide restricted links only once the profile has loaded and the role
    // is known to be outside the list.
    let show_deal_pipeline = move || {
        auth.get()
            .user
            .map_or(true, |u| routes::DEAL_PIPELINE_ROLES.contains(&u.role))
    };
    let show_integrations = move || {
        auth.get()
            .user
            .map_or(true, |u| routes::INTEGRATIONS_ROLES.contains(&u.role))
    };

    let on_sign_out = move |_| {
        auth.update(AuthState::logout);
        navigate(routes::LOGIN, NavigateOptions::default());
    };

    view! {
        <div class="shell">
            <aside class="shell__sidebar">
                <div class="shell__brand">"Summit"</div>
                <nav class="shell__nav">
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/my-twgs">"My TWGs"</a>
                    <a href="/twgs">"TWG Directory"</a>
                    <a href="/schedule">"Schedule"</a>
                    <a href="/knowledge-base">"Knowledge Base"</a>
                    <a href="/actions">"Action Tracker"</a>
                    <a href="/documents">"Documents"</a>
                    <Show when=show_deal_pipeline>
                        <a href="/deal-pipeline">"Deal Pipeline"</a>
                    </Show>
                    <a href="/assistant">"Assistant"</a>
                    <a href="/notifications">"Notifications"</a>
                    <Show when=show_integrations>
                        <a href="/integrations">"Integrations"</a>
                    </Show>
                </nav>
                <div class="shell__footer">
                    <a href="/profile" class="shell__user">
                        {user_name}
                    </a>
                    <button
                        class="shell__theme-toggle"
                        on:click=move |_| dark.set(dark_mode::toggle(dark.get_untracked()))
                    >
                        {move || if dark.get() { "Light mode" } else { "Dark mode" }}
                    </button>
                    <button class="shell__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </aside>
            <main class="shell__content">
                <Outlet/>
            </main>
        </div>
    }
}
