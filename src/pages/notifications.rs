//! Notification center.

use leptos::prelude::*;

/// Notification center page.
#[component]
pub fn NotificationCenterPage() -> impl IntoView {
    view! {
        <div class="notifications-page">
            <h1>"Notifications"</h1>
            <p>"Mentions, assignments, and workspace activity."</p>
        </div>
    }
}
