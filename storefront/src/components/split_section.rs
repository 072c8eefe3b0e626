//! Two-column text + visual section

use leptos::prelude::*;

use crate::catalog::DEFAULT_CTA;

/// Heading, paragraph and one CTA next to a placeholder visual.
///
/// Any strings are accepted; an empty title renders an empty heading.
#[component]
pub fn SplitSection(
    /// Section heading
    #[prop(into)]
    title: String,
    /// Body paragraph
    #[prop(into)]
    text: String,
    /// Button label, defaults to "Learn More"
    #[prop(optional, into)]
    cta: Option<String>,
) -> impl IntoView {
    let cta = cta.unwrap_or_else(|| DEFAULT_CTA.to_string());

    view! {
        <section class="split">
            <div class="split-content">
                <h2 class="split-title">{title}</h2>
                <p class="split-text">{text}</p>
                <button type="button" class="btn btn-solid">{cta}</button>
            </div>
            <div class="placeholder split-visual"></div>
        </section>
    }
}
