//! Full-height hero with the product name and the GitHub call to action.

use leptos::prelude::*;

use crate::content::{GITHUB_URL, SITE_NAME, Section, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="hero">
            <div class="hero__panel">
                <h2 class="hero__title">{SITE_NAME}</h2>
                <p class="hero__tagline">{TAGLINE}</p>
                <a href=GITHUB_URL class="hero__cta" target="_blank" rel="noopener noreferrer">
                    "Explore on GitHub"
                </a>
            </div>
        </section>
    }
}
