//! Dropdown navigation shown under the header on narrow screens.

use leptos::prelude::*;

use super::icons::{Icon, section_icon};
use super::theme_toggle::ThemeToggle;
use crate::content::Section;
use crate::state::menu::MenuState;
use crate::util::scroll::DocumentViewport;

/// Rendered only while the menu is open. Picking a section scrolls to it and
/// closes the menu; the theme toggle leaves it open.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <Show when=move || menu.get().open>
            <div class="mobile-menu">
                <nav class="mobile-menu__nav">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="mobile-menu__item"
                                    on:click=move |_| {
                                        menu.update(|m| m.select_and_close(&DocumentViewport, section));
                                    }
                                >
                                    <Icon kind=section_icon(section)/>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle wide=true/>
                </nav>
            </div>
        </Show>
    }
}
