//! Page footer with newsletter input

use leptos::prelude::*;

use super::NavLinks;
use crate::catalog::{BRAND, COPYRIGHT, EMAIL_PLACEHOLDER, NEWSLETTER_TEASER, nav_summary};
use crate::newsletter::NewsletterDraft;
use crate::types::Viewport;

/// Footer: brand, link row, newsletter field with an inert "Send" button,
/// and the legal line.
///
/// The link row stays in the markup on narrow viewports but is hidden.
#[component]
pub fn Footer(
    /// Layout class of the page
    #[prop(optional)]
    viewport: Viewport,
    /// Backing state of the email field; a fresh draft when omitted
    #[prop(optional)]
    newsletter: Option<NewsletterDraft>,
) -> impl IntoView {
    let draft = newsletter.unwrap_or_default();

    view! {
        <footer class="footer">
            <div class="footer-top">
                <h2 class="footer-brand">{BRAND}</h2>
                <NavLinks class="footer-links" hidden=viewport.is_narrow() />
                <div class="spacer"></div>
                <div class="newsletter">
                    <p class="newsletter-teaser">{NEWSLETTER_TEASER}</p>
                    <div class="input-group">
                        <input
                            type="email"
                            class="email-input"
                            placeholder=EMAIL_PLACEHOLDER
                            value=move || draft.tracked_value()
                            on:input=move |ev| draft.record_input(event_target_value(&ev))
                        />
                        <div class="input-addon">
                            <button type="button" class="btn btn-solid btn-sm">"Send"</button>
                        </div>
                    </div>
                </div>
            </div>
            <hr class="divider" />
            <div class="footer-bottom">
                <p class="copyright">{COPYRIGHT}</p>
                <p class="link-summary">{nav_summary()}</p>
            </div>
        </footer>
    }
}
