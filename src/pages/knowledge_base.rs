//! Knowledge base.

use leptos::prelude::*;

/// Knowledge base page.
#[component]
pub fn KnowledgeBasePage() -> impl IntoView {
    view! {
        <div class="knowledge-base-page">
            <h1>"Knowledge Base"</h1>
            <p>"Reference articles and past summit outcomes."</p>
        </div>
    }
}
