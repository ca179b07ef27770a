//! Page-level UI state.
//!
//! ARCHITECTURE
//! ============
//! Both flags are plain values wrapped in `RwSignal`s by `app::App` and shared
//! through context. Browser effects are passed in at the mutation sites so the
//! transitions stay testable without a DOM.

pub mod menu;
pub mod theme;
