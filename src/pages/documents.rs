//! Shared document library.

use leptos::prelude::*;

/// Document library page.
#[component]
pub fn DocumentLibraryPage() -> impl IntoView {
    view! {
        <div class="documents-page">
            <h1>"Document Library"</h1>
            <p>"Summit papers, minutes, and shared files."</p>
        </div>
    }
}
