//! Support section pointing at the Discord community.

use leptos::prelude::*;

use crate::content::{DISCORD_INVITE_URL, SITE_NAME, Section};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="section">
            <div class="container">
                <h3 class="section__title">"Need Support?"</h3>
                <p class="contact__text">
                    "Join our Discord server for inquiries and support: "
                    <a href=DISCORD_INVITE_URL class="link" target="_blank" rel="noopener noreferrer">
                        {format!("{SITE_NAME} Discord")}
                    </a>
                </p>
            </div>
        </section>
    }
}
