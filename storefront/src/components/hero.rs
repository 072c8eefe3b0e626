use leptos::prelude::*;

use crate::catalog::{HERO_TEXT, HERO_TITLE};

/// Headline, marketing copy and two buttons beside a placeholder visual.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-text">{HERO_TEXT}</p>
                <div class="hero-actions">
                    <button type="button" class="btn btn-solid">"Learn More"</button>
                    <button type="button" class="btn btn-outline">"View"</button>
                </div>
            </div>
            <div class="placeholder hero-visual"></div>
        </section>
    }
}
