//! About section: overview image beside the product description.

use leptos::prelude::*;

use crate::content::{ABOUT_COPY, ABOUT_IMAGE, ABOUT_IMAGE_ALT, SITE_NAME, Section};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section section--muted">
            <div class="container">
                <h3 class="section__title">{format!("About {SITE_NAME}")}</h3>
                <div class="about">
                    <div class="about__media">
                        <img src=ABOUT_IMAGE alt=ABOUT_IMAGE_ALT class="about__image"/>
                    </div>
                    <div class="about__text">
                        <p>{ABOUT_COPY}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
