//! Summit schedule.

use leptos::prelude::*;

/// Schedule page: sessions, rooms, and timings.
#[component]
pub fn SchedulePage() -> impl IntoView {
    view! {
        <div class="schedule-page">
            <h1>"Summit Schedule"</h1>
            <p>"Sessions, rooms, and timings."</p>
        </div>
    }
}
