//! Durable bearer-token storage.
//!
//! Mirrors the in-memory `AuthState.token` into browser `localStorage`
//! under a fixed key so a session survives a reload. Writes are
//! best-effort: storage failures are ignored, matching the rest of the
//! auth layer which treats persistence as advisory.
//!
//! Native test builds keep the token in a thread-local cell so the
//! storage mirror is observable without a browser. Plain SSR builds are
//! no-ops: the server never holds a client token.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

const STORAGE_KEY: &str = "token";

#[cfg(all(not(feature = "hydrate"), test))]
thread_local! {
    static MEMORY: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Read the token persisted by a previous session, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        MEMORY.with(|m| m.borrow().clone())
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        None
    }
}

/// Persist the token under the fixed key.
pub fn persist(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        MEMORY.with(|m| *m.borrow_mut() = Some(token.to_owned()));
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = token;
    }
}

/// Delete the persisted token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        MEMORY.with(|m| *m.borrow_mut() = None);
    }
}
