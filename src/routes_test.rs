use super::*;

// =============================================================
// Allow-lists
// =============================================================

#[test]
fn integrations_is_admin_only() {
    assert_eq!(INTEGRATIONS_ROLES, [Role::Admin]);
}

#[test]
fn deal_pipeline_excludes_delegates() {
    assert!(DEAL_PIPELINE_ROLES.contains(&Role::Admin));
    assert!(DEAL_PIPELINE_ROLES.contains(&Role::Facilitator));
    assert!(DEAL_PIPELINE_ROLES.contains(&Role::SecretariatLead));
    assert!(!DEAL_PIPELINE_ROLES.contains(&Role::Delegate));
}

// =============================================================
// Login redirect target
// =============================================================

#[test]
fn login_redirect_carries_requested_path() {
    assert_eq!(login_redirect("/dashboard"), "/login?from=%2Fdashboard");
}

#[test]
fn login_redirect_keeps_nested_paths_intact() {
    assert_eq!(
        login_redirect("/workspace/twg-42"),
        "/login?from=%2Fworkspace%2Ftwg-42"
    );
}

#[test]
fn login_redirect_escapes_query_delimiters() {
    // `&` or `#` in the requested path must not truncate the `from` value
    // the login page reads back.
    assert_eq!(
        login_redirect("/documents?tag=a&b#frag"),
        "/login?from=%2Fdocuments%3Ftag%3Da%26b%23frag"
    );
    let encoded = login_redirect("/a&b");
    assert!(!encoded.contains('&'));
}

#[test]
fn login_redirect_round_trips_through_decoding() {
    let target = login_redirect("/workspace/twg-42?tab=docs&sort=new");
    let value = target.strip_prefix("/login?from=").unwrap();
    assert_eq!(
        urlencoding::decode(value).unwrap(),
        "/workspace/twg-42?tab=docs&sort=new"
    );
}
