//! Shared components: the route guard and the dashboard shell layout.

pub mod dashboard_layout;
pub mod require_auth;
