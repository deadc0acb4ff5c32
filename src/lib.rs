//! # summit-client
//!
//! Leptos + WASM frontend for the summit workspace application: route
//! declarations, a role-aware route guard, and authentication state with a
//! durable token session.
//!
//! This crate contains pages, components, application state, the route
//! table, and the REST helpers for the auth endpoints. Page bodies beyond
//! the auth flow are intentionally thin; the routing and auth layers are
//! the substance here.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
