//! # storefront-leptos
//!
//! Leptos SSR renderer for the JWShop landing page.
//!
//! The page is a fixed composition of stateless components (nav bar, hero,
//! two split sections, a bestseller grid, a journal grid and a footer with a
//! newsletter field) over literal catalog data. Rendering produces a
//! complete static HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_leptos::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::for_width(1280));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(storefront_leptos::contract::verify(&html).is_satisfied());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content records and viewport classification
//! - [`catalog`] - The literal page content
//! - [`theme`] - Global typography and colours
//! - [`components`] - Leptos UI components
//! - [`newsletter`] - Reactive state of the email field
//! - [`styles`] - Layout CSS
//! - [`inspect`] - Role/text queries over rendered HTML
//! - [`contract`] - Checks a document against the page's markup contract
//!
//! Layout depends on an explicit [`types::Viewport`] passed down from
//! [`PageOptions`]; no component reads ambient state.

#![warn(missing_docs)]

pub mod catalog;
pub mod components;
pub mod contract;
pub mod inspect;
pub mod newsletter;
pub mod styles;
pub mod theme;
pub mod types;

use components::{Home, PageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use newsletter::NewsletterDraft;
use theme::Theme;
use types::{Viewport, classify_viewport};

/// Everything a render depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Global typography and colours
    pub theme: Theme,
    /// Layout class used for the whole page
    pub viewport: Viewport,
}

impl PageOptions {
    /// Default theme, layout chosen from a viewport width in CSS pixels.
    pub fn for_width(width_px: u32) -> Self {
        Self {
            theme: Theme::default(),
            viewport: classify_viewport(width_px),
        }
    }
}

/// Render the complete landing page, including `<!DOCTYPE html>`.
///
/// Rendering is deterministic: equal options give byte-identical output.
///
/// # Example
///
/// ```rust
/// use storefront_leptos::{render_page, PageOptions};
/// use storefront_leptos::types::Viewport;
///
/// let options = PageOptions { viewport: Viewport::Narrow, ..Default::default() };
/// let html = render_page(&options);
/// assert!(html.contains("aria-label=\"menu\""));
/// ```
pub fn render_page(options: &PageOptions) -> String {
    render_page_with(options, None)
}

/// Render the complete page with an existing newsletter draft, so the email
/// field shows the draft's current value.
pub fn render_page_with(options: &PageOptions, newsletter: Option<NewsletterDraft>) -> String {
    tracing::debug!(viewport = options.viewport.as_str(), "rendering page");
    let owner = Owner::new_root(None);
    let html = owner.with(|| {
        let draft = newsletter.unwrap_or_default();
        view! { <PageDocument options=options.clone() newsletter=draft /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the [`Home`] composition, without document shell or theme.
pub fn render_home(viewport: Viewport) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| view! { <Home viewport=viewport /> }.to_html())
}
