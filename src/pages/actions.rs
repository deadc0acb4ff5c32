//! Action tracker.

use leptos::prelude::*;

/// Action tracker page.
#[component]
pub fn ActionTrackerPage() -> impl IntoView {
    view! {
        <div class="actions-page">
            <h1>"Action Tracker"</h1>
            <p>"Commitments and follow-ups across workspaces."</p>
        </div>
    }
}
