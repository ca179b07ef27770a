//! Feature cards grid.

use leptos::prelude::*;

use crate::content::{FEATURES, Section};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="section section--alt">
            <div class="container">
                <h3 class="section__title">"Project Features"</h3>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card">
                                    <h4 class="card__title">{feature.title}</h4>
                                    <p class="card__body">{feature.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
