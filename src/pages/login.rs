//! Login page: email/password form driving the auth transitions.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Login page.
///
/// On submit: `set_loading(true)`, call the login endpoint, then either
/// `set_credentials` and navigate to the path the guard remembered in the
/// `from` query parameter (default `/dashboard`), or `set_error` with the
/// failure message, which renders below the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let loading = move || auth.get().loading;
    let error = move || auth.get().error;

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let query = leptos_router::hooks::use_query_map();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.get_untracked().trim().is_empty() || password.get_untracked().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let destination = query
                .get_untracked()
                .get("from")
                .unwrap_or_else(|| crate::routes::DASHBOARD.to_owned());

            auth.update(|s| s.set_loading(true));
            leptos::task::spawn_local(async move {
                let result =
                    crate::net::api::login(&email.get_untracked(), &password.get_untracked())
                        .await;
                match result {
                    Ok(creds) => {
                        auth.update(|s| {
                            s.set_loading(false);
                            s.set_credentials(creds.user, creds.token);
                        });
                        navigate(&destination, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => auth.update(|s| s.set_error(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Summit Workspace"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
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
                    {move || if loading() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/register">"Create an account"</a>
                " · "
                <a href="/forgot-password">"Forgot password?"</a>
            </p>
        </div>
    }
}
