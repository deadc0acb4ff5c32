//! Static route table data: well-known paths and per-route role
//! allow-lists. The tree itself is declared in [`crate::app`]; everything
//! here is plain data so the guard and the tests share one source.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Default landing path for authenticated users; `/` redirects here.
pub const DASHBOARD: &str = "/dashboard";

/// Sign-in page; unauthenticated navigation to any guarded path lands here.
pub const LOGIN: &str = "/login";

/// Roles allowed on `/integrations`.
pub const INTEGRATIONS_ROLES: &[Role] = &[Role::Admin];

/// Roles allowed on `/deal-pipeline`.
pub const DEAL_PIPELINE_ROLES: &[Role] =
    &[Role::Admin, Role::Facilitator, Role::SecretariatLead];

/// Login URL carrying the originally requested path, so the login page can
/// resume the navigation after a successful sign-in. The path is
/// percent-encoded so `&` or `#` in it cannot truncate the query value;
/// the router decodes it again when the login page reads it back.
pub fn login_redirect(from: &str) -> String {
    format!("{LOGIN}?from={}", urlencoding::encode(from))
}
