//! Dark mode persistence and document marker.
//!
//! Reads the user's preference from a [`PreferenceStore`] and toggles a `dark`
//! class on the `<html>` element. Every theme rule in the stylesheet is keyed
//! off that class.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are logged and otherwise ignored: a broken or full
//! `localStorage` leaves the session running on the in-memory flag. SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::PreferenceStore;

/// `localStorage` key holding `"true"` or `"false"`.
pub const STORAGE_KEY: &str = "darkMode";

/// Class added to the document element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Document-level marker the stylesheet switches on.
pub trait ThemeMarker {
    fn apply(&self, dark: bool);
}

/// The `class` list of the page's `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeMarker for DocumentTheme {
    fn apply(&self, dark: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, dark);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dark;
        }
    }
}

/// Interpret a stored value: only the exact string `"true"` means dark.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// String form written back to storage.
pub fn flag_value(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}

/// Read the dark mode preference, defaulting to light on absence or failure.
pub fn read_preference(store: &impl PreferenceStore) -> bool {
    match store.get(STORAGE_KEY) {
        Ok(raw) => parse_flag(raw.as_deref()),
        Err(e) => {
            log::warn!("dark mode preference not loaded: {e}");
            false
        }
    }
}

/// Persist the dark mode preference. Failures are logged, never raised.
pub fn write_preference(store: &impl PreferenceStore, dark: bool) {
    if let Err(e) = store.set(STORAGE_KEY, flag_value(dark)) {
        log::warn!("dark mode preference not saved: {e}");
    }
}

/// Inline `<head>` script that marks `<html>` from storage before first paint.
///
/// Hydration later loads the same preference into state, so the class this
/// sets is never contradicted.
pub fn boot_script() -> String {
    format!(
        "try{{if(localStorage.getItem(\"{STORAGE_KEY}\")===\"true\")\
         document.documentElement.classList.add(\"{DARK_CLASS}\")}}catch(e){{}}"
    )
}
