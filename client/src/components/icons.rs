//! Glyph icons for navigation and the theme toggle.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;

use crate::content::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Moon,
    Home,
    Star,
    Info,
    Question,
    Envelope,
}

impl IconKind {
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Sun => "☀",
            IconKind::Moon => "☾",
            IconKind::Home => "⌂",
            IconKind::Star => "★",
            IconKind::Info => "ℹ",
            IconKind::Question => "?",
            IconKind::Envelope => "✉",
        }
    }
}

/// Icon shown next to a section in the mobile menu.
pub fn section_icon(section: Section) -> IconKind {
    match section {
        Section::Home => IconKind::Home,
        Section::Features => IconKind::Star,
        Section::About => IconKind::Info,
        Section::Faq => IconKind::Question,
        Section::Contact => IconKind::Envelope,
    }
}

#[component]
pub fn Icon(kind: IconKind) -> impl IntoView {
    view! { <span class="icon" aria-hidden="true">{kind.glyph()}</span> }
}
