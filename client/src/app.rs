//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{SITE_NAME, TAGLINE};
use crate::pages::landing::LandingPage;
use crate::state::{menu::MenuState, theme::ThemePreference};
use crate::util::dark_mode::{self, DocumentTheme};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=dark_mode::boot_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the theme and menu signals and provides them to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemePreference::default());
    let menu = RwSignal::new(MenuState::default());
    provide_context(theme);
    provide_context(menu);

    // Effects only run in the browser. The `<html>` class is already set by the
    // boot script in `shell`; this brings the signal in line with it.
    Effect::new(move |_| {
        theme.set(ThemePreference::load(&BrowserStorage, &DocumentTheme));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vector24.css"/>
        <Title text=SITE_NAME/>
        <Meta name="description" content=TAGLINE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
