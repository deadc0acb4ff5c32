//! Forgot-password page: requests a reset email.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Email form for requesting a password-reset link. Shows a confirmation
/// once the request is accepted; failures surface via `AuthState.error`.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let loading = move || auth.get().loading;
    let error = move || auth.get().error;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.get_untracked().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            auth.update(|s| s.set_loading(true));
            leptos::task::spawn_local(async move {
                match crate::net::api::forgot_password(&email.get_untracked()).await {
                    Ok(()) => {
                        auth.update(|s| s.set_loading(false));
                        sent.set(true);
                    }
                    Err(e) => auth.update(|s| s.set_error(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Reset your password"</h1>
            <Show
                when=move || !sent.get()
                fallback=|| {
                    view! {
                        <p class="auth-page__confirmation">
                            "Check your email for a reset link."
                        </p>
                    }
                }
            >
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
                    <Show when=move || error().is_some()>
                        <p class="auth-form__error">{move || error().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=loading>
                        {move || if loading() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
            </Show>
            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}
