//! The signed-in user's profile.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Profile page showing the fields of the validated user record.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        view! {
                            <dl class="profile-page__fields">
                                <dt>"Name"</dt>
                                <dd>{user.name}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role.to_string()}</dd>
                            </dl>
                        }
                            .into_any()
                    })
                    .unwrap_or_else(|| view! { <p>"Loading profile..."</p> }.into_any())
            }}
        </div>
    }
}
