//! Integration settings. Admin-only; the route guard enforces the role.

use leptos::prelude::*;

/// Integration settings page (mail, calendar, storage connectors).
#[component]
pub fn IntegrationsPage() -> impl IntoView {
    view! {
        <div class="integrations-page">
            <h1>"Integrations"</h1>
            <p>"Connect mail, calendar, and storage providers."</p>
        </div>
    }
}
