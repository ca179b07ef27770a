//! Fixed site header with brand, desktop navigation and the hamburger button.

use leptos::prelude::*;

use super::mobile_menu::MobileMenu;
use super::theme_toggle::ThemeToggle;
use crate::content::{SITE_NAME, Section};
use crate::state::menu::MenuState;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let is_open = move || menu.get().open;

    view! {
        <header class="site-header">
            <div class="container site-header__bar">
                <h1 class="site-header__brand">{SITE_NAME}</h1>

                <nav class="site-nav">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="site-nav__link"
                                    on:click=move |_| scroll_to_section(section.id())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle/>
                </nav>

                <button
                    class="hamburger"
                    class:open=is_open
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| {
                        menu.update(|m| {
                            m.toggle();
                        });
                    }
                >
                    <span class="hamburger__bar hamburger__bar--top"></span>
                    <span class="hamburger__bar hamburger__bar--middle"></span>
                    <span class="hamburger__bar hamburger__bar--bottom"></span>
                </button>
            </div>

            <MobileMenu/>
        </header>
    }
}
