//! Frequently asked questions.

use leptos::prelude::*;

use crate::content::{FAQ, Section};

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id=Section::Faq.id() class="section section--alt">
            <div class="container">
                <h3 class="section__title">"Frequently Asked Questions"</h3>
                <div class="faq">
                    {FAQ
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="card">
                                    <h4 class="card__title">{entry.question}</h4>
                                    <p class="card__body">{entry.answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
