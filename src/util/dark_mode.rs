//! Dark theme preference.
//!
//! The choice is stored in `localStorage` as `"dark"` or `"light"` and
//! applied as a `dark` class on the `<html>` element, which the stylesheet
//! keys all dark-theme rules off. With no stored choice, the system
//! preference wins. Requires a browser environment; inert under SSR.

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "theme";

/// Whether the dark theme should be active right now.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(THEME_KEY) {
                return stored == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set or remove the `dark` class on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            if enabled {
                let _ = classes.add_1("dark");
            } else {
                let _ = classes.remove_1("dark");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
