use super::*;

// The test backend is thread-local; tests that assert emptiness clear it
// first so they hold under --test-threads=1 as well.

// =============================================================
// Load / persist / clear
// =============================================================

#[test]
fn load_is_empty_before_any_persist() {
    clear();
    assert_eq!(load(), None);
}

#[test]
fn persist_then_load_round_trips() {
    persist("tok1");
    assert_eq!(load(), Some("tok1".to_owned()));
}

#[test]
fn persist_overwrites_previous_token() {
    persist("tok1");
    persist("tok2");
    assert_eq!(load(), Some("tok2".to_owned()));
}

#[test]
fn clear_removes_persisted_token() {
    persist("tok1");
    clear();
    assert_eq!(load(), None);
}

#[test]
fn clear_on_empty_store_is_harmless() {
    clear();
    assert_eq!(load(), None);
}
