//! Dark-mode preference state.
//!
//! DESIGN
//! ======
//! The flag lives in memory and is synchronized with storage at exactly two
//! points: [`ThemePreference::load`] and [`ThemePreference::toggle`]. Both
//! apply the document marker right after the flag changes, so the marker
//! never lags the flag.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::dark_mode::{self, ThemeMarker};
use crate::util::storage::PreferenceStore;

/// Light/dark appearance chosen by the visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    dark: bool,
}

impl ThemePreference {
    /// Read the persisted preference and apply it to `marker`.
    pub fn load(store: &impl PreferenceStore, marker: &impl ThemeMarker) -> Self {
        let pref = Self { dark: dark_mode::read_preference(store) };
        marker.apply(pref.dark);
        pref
    }

    pub fn is_dark(self) -> bool {
        self.dark
    }

    /// Flip the theme, apply the marker, persist, and return the new value.
    pub fn toggle(&mut self, store: &impl PreferenceStore, marker: &impl ThemeMarker) -> bool {
        self.dark = !self.dark;
        marker.apply(self.dark);
        dark_mode::write_preference(store, self.dark);
        self.dark
    }
}
