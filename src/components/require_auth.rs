//! Route guard: decides per navigation whether guarded content renders.
//!
//! DESIGN
//! ======
//! The decision itself is a pure function over (token, role, allow-list,
//! requested path) so it can be tested without a browser. The component
//! wrapper reads auth state from context, re-evaluates reactively, and
//! applies redirects as replace-navigations.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::routes;
use crate::state::auth::AuthState;

/// Outcome of a guard check for one navigation. Total: every input state
/// maps to exactly one variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Mount the guarded content.
    Render,
    /// No token: go sign in, remembering where the user was headed.
    RedirectToLogin { from: String },
    /// Signed in, but the role is outside this route's allow-list.
    RedirectToDashboard,
}

/// Decide what a navigation to a guarded route should do.
///
/// A route with an allow-list but no loaded user record (token restored,
/// profile fetch still in flight) renders; the role check applies only
/// once the profile is present and the guard re-evaluates when it lands.
pub fn evaluate(
    token: Option<&str>,
    role: Option<Role>,
    allowed_roles: Option<&[Role]>,
    requested: &str,
) -> GuardOutcome {
    if token.is_none() {
        return GuardOutcome::RedirectToLogin {
            from: requested.to_owned(),
        };
    }
    match (allowed_roles, role) {
        (Some(allowed), Some(role)) if !allowed.contains(&role) => {
            GuardOutcome::RedirectToDashboard
        }
        _ => GuardOutcome::Render,
    }
}

/// Wraps protected route content.
///
/// Without `allowed_roles`, any authenticated user passes; with it, the
/// signed-in user's role must be a member. Redirects replace the history
/// entry so Back does not bounce through the guarded path.
#[component]
pub fn RequireAuth(
    /// Roles permitted on this route; omit to admit any authenticated user.
    #[prop(into, optional)]
    allowed_roles: Option<&'static [Role]>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let state = auth.get();
        let requested = location.pathname.get();
        evaluate(
            state.token.as_deref(),
            state.user.as_ref().map(|u| u.role),
            allowed_roles,
            &requested,
        )
    });

    Effect::new(move || {
        let replace = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        match outcome.get() {
            GuardOutcome::Render => {}
            GuardOutcome::RedirectToLogin { from } => {
                navigate(&routes::login_redirect(&from), replace);
            }
            GuardOutcome::RedirectToDashboard => {
                navigate(routes::DASHBOARD, replace);
            }
        }
    });

    view! {
        <Show when=move || outcome.get() == GuardOutcome::Render>
            {children()}
        </Show>
    }
}
