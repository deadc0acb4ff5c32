//! Directory of all technical working groups.

use leptos::prelude::*;

/// TWG directory page.
#[component]
pub fn TwgDirectoryPage() -> impl IntoView {
    view! {
        <div class="twgs-page">
            <h1>"Technical Working Groups"</h1>
            <p>"Browse every TWG and request to join."</p>
        </div>
    }
}
