//! Top navigation bar

use leptos::prelude::*;

use crate::catalog::{BRAND, NAV_LINKS};
use crate::types::Viewport;

/// Brand heading plus either the inline links (wide) or a menu button (narrow).
///
/// The menu button has no open/close behaviour.
#[component]
pub fn Nav(
    /// Layout class of the page
    #[prop(optional)]
    viewport: Viewport,
) -> impl IntoView {
    tracing::debug!(viewport = viewport.as_str(), "rendering nav");

    let menu = if viewport.is_narrow() {
        view! {
            <button type="button" class="menu-button" aria-label="menu">
                <span class="menu-bar"></span>
            </button>
        }
        .into_any()
    } else {
        view! { <NavLinks class="nav-links" /> }.into_any()
    };

    view! {
        <nav class="nav">
            <h2 class="nav-brand">{BRAND}</h2>
            {menu}
        </nav>
    }
}

/// The fixed link row, shared with the footer.
#[component]
pub fn NavLinks(
    /// CSS class of the row container
    class: &'static str,
    /// Render the row with the `hidden` attribute (still present in markup)
    #[prop(default = false)]
    hidden: bool,
) -> impl IntoView {
    view! {
        <div class=class hidden=hidden>
            {NAV_LINKS
                .iter()
                .map(|link| view! { <a class="nav-link">{link.label}</a> })
                .collect::<Vec<_>>()}
        </div>
    }
}
