//! Page composition root

use leptos::prelude::*;

use super::{Bestsellers, Footer, Hero, Journal, Nav, SplitSection};
use crate::catalog::{DEFAULT_CTA, IDEAL_SECTION, SWISS_SECTION};
use crate::newsletter::NewsletterDraft;
use crate::types::Viewport;

/// The whole landing page in fixed order.
#[component]
pub fn Home(
    /// Layout class of the page
    #[prop(optional)]
    viewport: Viewport,
    /// Backing state of the email field
    #[prop(optional)]
    newsletter: Option<NewsletterDraft>,
) -> impl IntoView {
    let draft = newsletter.unwrap_or_default();

    view! {
        <div class="page" data-viewport=viewport.as_str()>
            <Nav viewport=viewport />
            <Hero />
            <SplitSection
                title=IDEAL_SECTION.title
                text=IDEAL_SECTION.text
                cta=IDEAL_SECTION.cta.unwrap_or(DEFAULT_CTA)
            />
            <Bestsellers viewport=viewport />
            <SplitSection
                title=SWISS_SECTION.title
                text=SWISS_SECTION.text
                cta=SWISS_SECTION.cta.unwrap_or(DEFAULT_CTA)
            />
            <Journal viewport=viewport />
            <Footer viewport=viewport newsletter=draft />
        </div>
    }
}
