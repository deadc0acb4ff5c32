//! Agent assistant.

use leptos::prelude::*;

/// Assistant page.
#[component]
pub fn AssistantPage() -> impl IntoView {
    view! {
        <div class="assistant-page">
            <h1>"Assistant"</h1>
            <p>"Ask about workspaces, schedules, and documents."</p>
        </div>
    }
}
