//! Registration page; a successful registration signs the user in.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Registration form: name, email, password. Same transition discipline
/// as the login page; lands on the dashboard after sign-up.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let loading = move || auth.get().loading;
    let error = move || auth.get().error;

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get_untracked().trim().is_empty()
            || email.get_untracked().trim().is_empty()
            || password.get_untracked().is_empty()
        {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            auth.update(|s| s.set_loading(true));
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(
                    name.get_untracked().trim(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
                match result {
                    Ok(creds) => {
                        auth.update(|s| {
                            s.set_loading(false);
                            s.set_credentials(creds.user, creds.token);
                        });
                        navigate(
                            crate::routes::DASHBOARD,
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
            <h1>"Create your account"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                    {move || if loading() { "Creating..." } else { "Create account" }}
                </button>
            </form>
            <p class="auth-page__links">
                <a href="/login">"Already have an account? Sign in"</a>
            </p>
        </div>
    }
}
