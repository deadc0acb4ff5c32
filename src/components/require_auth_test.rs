use super::*;

// =============================================================
// Unauthenticated: always to login, remembering the target
// =============================================================

#[test]
fn no_token_redirects_to_login_with_requested_path() {
    let outcome = evaluate(None, None, None, "/dashboard");
    assert_eq!(
        outcome,
        GuardOutcome::RedirectToLogin {
            from: "/dashboard".to_owned()
        }
    );
}

#[test]
fn no_token_redirects_even_with_a_stale_role() {
    // A user record without a token should never happen, but the token
    // check still wins.
    let outcome = evaluate(None, Some(Role::Admin), Some(routes::INTEGRATIONS_ROLES), "/integrations");
    assert!(matches!(outcome, GuardOutcome::RedirectToLogin { .. }));
}

// =============================================================
// Authenticated, no allow-list: render
// =============================================================

#[test]
fn token_without_allow_list_renders() {
    assert_eq!(
        evaluate(Some("abc"), Some(Role::Delegate), None, "/documents"),
        GuardOutcome::Render
    );
}

#[test]
fn token_without_profile_or_allow_list_renders() {
    assert_eq!(
        evaluate(Some("abc"), None, None, "/dashboard"),
        GuardOutcome::Render
    );
}

// =============================================================
// Authenticated with allow-list
// =============================================================

#[test]
fn admin_may_view_integrations() {
    assert_eq!(
        evaluate(
            Some("abc"),
            Some(Role::Admin),
            Some(routes::INTEGRATIONS_ROLES),
            "/integrations"
        ),
        GuardOutcome::Render
    );
}

#[test]
fn facilitator_on_integrations_bounces_to_dashboard() {
    assert_eq!(
        evaluate(
            Some("abc"),
            Some(Role::Facilitator),
            Some(routes::INTEGRATIONS_ROLES),
            "/integrations"
        ),
        GuardOutcome::RedirectToDashboard
    );
}

#[test]
fn every_pipeline_role_may_view_deal_pipeline() {
    for role in [Role::Admin, Role::Facilitator, Role::SecretariatLead] {
        assert_eq!(
            evaluate(
                Some("abc"),
                Some(role),
                Some(routes::DEAL_PIPELINE_ROLES),
                "/deal-pipeline"
            ),
            GuardOutcome::Render
        );
    }
}

#[test]
fn delegate_on_deal_pipeline_bounces_to_dashboard() {
    assert_eq!(
        evaluate(
            Some("abc"),
            Some(Role::Delegate),
            Some(routes::DEAL_PIPELINE_ROLES),
            "/deal-pipeline"
        ),
        GuardOutcome::RedirectToDashboard
    );
}

// =============================================================
// Allow-list prop forms
// =============================================================

#[test]
fn allow_list_prop_accepts_bare_slice_or_omission() {
    // Route declarations pass allow-lists unwrapped; unguarded routes omit
    // the prop. Both forms funnel into the same Option the guard sees.
    let restricted: Option<&'static [Role]> = routes::INTEGRATIONS_ROLES.into();
    let open: Option<&'static [Role]> = None;
    assert_eq!(
        evaluate(Some("abc"), Some(Role::Admin), restricted, "/integrations"),
        GuardOutcome::Render
    );
    assert_eq!(
        evaluate(Some("abc"), Some(Role::Delegate), open, "/dashboard"),
        GuardOutcome::Render
    );
}

// =============================================================
// Profile still loading on a restricted route
// =============================================================

#[test]
fn allow_list_without_profile_renders_until_profile_loads() {
    // Deliberate: token restored from storage, /api/auth/me still in
    // flight. The guard re-evaluates when the profile lands.
    assert_eq!(
        evaluate(Some("abc"), None, Some(routes::INTEGRATIONS_ROLES), "/integrations"),
        GuardOutcome::Render
    );
}
