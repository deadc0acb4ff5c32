//! Network layer: wire types for users/roles and REST helpers for the
//! auth endpoints.

pub mod api;
pub mod types;
