//! The single landing page: header followed by the five sections.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, faq::Faq, features::Features, header::SiteHeader, hero::Hero,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader/>
            <main>
                <Hero/>
                <Features/>
                <About/>
                <Faq/>
                <Contact/>
            </main>
        </div>
    }
}
