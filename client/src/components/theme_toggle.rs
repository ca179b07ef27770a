//! Dark-mode toggle button, in a round desktop form and a wide mobile form.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::state::theme::ThemePreference;
use crate::util::dark_mode::DocumentTheme;
use crate::util::storage::BrowserStorage;

/// Icon shown on the toggle: the theme a click would switch to.
pub(crate) fn toggle_icon(dark: bool) -> IconKind {
    if dark { IconKind::Sun } else { IconKind::Moon }
}

/// Label of the wide toggle, naming the mode a click switches to.
pub(crate) fn toggle_label(dark: bool) -> &'static str {
    if dark { "Light Mode" } else { "Dark Mode" }
}

#[component]
pub fn ThemeToggle(
    /// Full-width variant with a text label, used in the mobile menu.
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();
    let is_dark = move || theme.get().is_dark();

    let on_toggle = move |_| {
        theme.update(|t| {
            t.toggle(&BrowserStorage, &DocumentTheme);
        });
    };

    view! {
        <button
            class=if wide { "theme-toggle theme-toggle--wide" } else { "theme-toggle" }
            class:active=is_dark
            aria-label="Toggle dark mode"
            title="Toggle dark mode"
            on:click=on_toggle
        >
            {move || view! { <Icon kind=toggle_icon(is_dark())/> }}
            {wide.then(|| view! { <span>{move || toggle_label(is_dark())}</span> })}
        </button>
    }
}
