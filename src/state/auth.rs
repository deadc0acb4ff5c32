#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::token_store;

/// Authentication state: the single source of truth for who is signed in.
///
/// One instance exists per running client, held in an `RwSignal` provided
/// via context. Components never poke the fields directly; the four
/// transition methods below are the only mutation surface, and the two
/// that touch `token` mirror the change into durable storage in the same
/// step so memory and storage never observably diverge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// An auth API call is in flight. Set by the pages driving the call;
    /// independent of the other fields.
    pub loading: bool,
    /// Last auth failure, as shown to the user. Never read by the guard.
    pub error: Option<String>,
}

impl AuthState {
    /// State at process start: token seeded from the previous session's
    /// durable storage, profile not yet loaded.
    pub fn restore() -> Self {
        Self {
            token: token_store::load(),
            ..Self::default()
        }
    }

    /// A sign-in (or token re-validation) succeeded. Idempotent.
    pub fn set_credentials(&mut self, user: User, token: String) {
        token_store::persist(&token);
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
        self.error = None;
    }

    /// Drop the session, in memory and in durable storage. Idempotent.
    pub fn logout(&mut self) {
        token_store::clear();
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.error = None;
    }

    /// Mark an auth API call as started or finished. Touches nothing else.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Record an auth failure. An error always ends a loading cycle.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }
}
