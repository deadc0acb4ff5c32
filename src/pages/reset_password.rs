//! Reset-password page: sets a new password using the emailed token.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// New-password form. The reset token arrives in the `token` query
/// parameter of the emailed link; on success the user returns to sign in.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let password = RwSignal::new(String::new());

    let loading = move || auth.get().loading;
    let error = move || auth.get().error;

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let query = leptos_router::hooks::use_query_map();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password.get_untracked().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = query.get_untracked().get("token") else {
                auth.update(|s| s.set_error("missing reset token"));
                return;
            };
            let navigate = navigate.clone();
            auth.update(|s| s.set_loading(true));
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&token, &password.get_untracked()).await {
                    Ok(()) => {
                        auth.update(|s| s.set_loading(false));
                        navigate(
                            crate::routes::LOGIN,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(e) => auth.update(|s| s.set_error(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Choose a new password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "New password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error().is_some()>
                    <p class="auth-form__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=loading>
                    {move || if loading() { "Saving..." } else { "Set password" }}
                </button>
            </form>
        </div>
    }
}
