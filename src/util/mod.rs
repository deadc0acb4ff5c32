//! Browser-facing utilities: durable token storage and the dark-mode
//! preference. Both degrade to no-ops outside the browser.

pub mod dark_mode;
pub mod token_store;
