//! The signed-in user's working groups.

use leptos::prelude::*;

/// List of the TWG workspaces the user belongs to.
#[component]
pub fn MyTwgsPage() -> impl IntoView {
    view! {
        <div class="my-twgs-page">
            <h1>"My TWGs"</h1>
            <p>"Workspaces you facilitate or belong to."</p>
        </div>
    }
}
