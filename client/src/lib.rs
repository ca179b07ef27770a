//! # vector24-client
//!
//! Leptos frontend for the Vector24 landing page.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Browser-only glue lives in `util`; `state` holds the two UI
//! flags (theme and mobile menu) the page reacts to.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
