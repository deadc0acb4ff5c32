//! Deal pipeline. Restricted to admins, facilitators, and secretariat
//! leads; the route guard enforces the allow-list.

use leptos::prelude::*;

/// Deal pipeline page.
#[component]
pub fn DealPipelinePage() -> impl IntoView {
    view! {
        <div class="pipeline-page">
            <h1>"Deal Pipeline"</h1>
            <p>"Investment opportunities by stage."</p>
        </div>
    }
}
