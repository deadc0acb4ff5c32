//! A single TWG workspace, addressed by id.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Workspace page for `/workspace/:id`.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let params = use_params_map();
    let workspace_id = move || params.get().get("id").unwrap_or_default();

    view! {
        <div class="workspace-page">
            <h1>"Workspace"</h1>
            <p class="workspace-page__id">{workspace_id}</p>
        </div>
    }
}
