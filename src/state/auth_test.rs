use super::*;
use crate::net::types::Role;
use crate::util::token_store;

fn admin() -> User {
    User {
        id: "1".to_owned(),
        email: "admin@summit.example".to_owned(),
        name: "Admin".to_owned(),
        role: Role::Admin,
    }
}

// =============================================================
// Defaults and restore
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn restore_with_empty_storage_matches_default() {
    token_store::clear();
    assert_eq!(AuthState::restore(), AuthState::default());
}

#[test]
fn restore_seeds_token_from_storage_without_profile() {
    token_store::persist("tok-prev");
    let state = AuthState::restore();
    assert_eq!(state.token.as_deref(), Some("tok-prev"));
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
}

// =============================================================
// set_credentials
// =============================================================

#[test]
fn set_credentials_signs_in_and_clears_error() {
    let mut state = AuthState::default();
    state.set_error("bad password");
    state.set_credentials(admin(), "tok1".to_owned());
    assert_eq!(state.user.as_ref().map(|u| u.role), Some(Role::Admin));
    assert_eq!(state.token.as_deref(), Some("tok1"));
    assert!(state.is_authenticated);
    assert!(state.error.is_none());
}

#[test]
fn set_credentials_persists_token_in_same_step() {
    let mut state = AuthState::default();
    state.set_credentials(admin(), "tok1".to_owned());
    assert_eq!(token_store::load(), Some("tok1".to_owned()));
}

#[test]
fn set_credentials_is_idempotent() {
    let mut state = AuthState::default();
    state.set_credentials(admin(), "tok1".to_owned());
    let once = state.clone();
    state.set_credentials(admin(), "tok1".to_owned());
    assert_eq!(state, once);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_after_set_credentials_round_trips_to_initial_state() {
    let mut state = AuthState::default();
    state.set_credentials(admin(), "tok1".to_owned());
    state.logout();
    assert_eq!(state, AuthState::default());
}

#[test]
fn logout_deletes_persisted_token() {
    let mut state = AuthState::default();
    state.set_credentials(admin(), "tok1".to_owned());
    state.logout();
    assert_eq!(token_store::load(), None);
}

#[test]
fn logout_is_idempotent() {
    let mut state = AuthState::default();
    state.set_credentials(admin(), "tok1".to_owned());
    state.logout();
    state.logout();
    assert_eq!(state, AuthState::default());
    assert_eq!(token_store::load(), None);
}

// =============================================================
// set_loading / set_error
// =============================================================

#[test]
fn set_loading_touches_only_the_loading_flag() {
    let mut state = AuthState::default();
    state.set_credentials(admin(), "tok1".to_owned());
    let before = state.clone();
    state.set_loading(true);
    assert!(state.loading);
    assert_eq!(
        AuthState {
            loading: false,
            ..state
        },
        before
    );
}

#[test]
fn set_error_records_message() {
    let mut state = AuthState::default();
    state.set_error("invalid credentials");
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
}

#[test]
fn set_error_always_ends_a_loading_cycle() {
    for initially_loading in [false, true] {
        let mut state = AuthState::default();
        state.set_loading(initially_loading);
        state.set_error("timeout");
        assert!(!state.loading);
    }
}

#[test]
fn set_error_leaves_session_fields_alone() {
    let mut state = AuthState::default();
    state.set_credentials(admin(), "tok1".to_owned());
    state.set_error("profile fetch failed");
    assert_eq!(state.token.as_deref(), Some("tok1"));
    assert!(state.is_authenticated);
    assert!(state.user.is_some());
}
