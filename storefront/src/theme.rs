//! Page theme: global typography and colours.
//!
//! The theme is a plain value handed to [`crate::render_page`] through
//! [`crate::PageOptions`]. [`ThemeProvider`] turns it into a single
//! `<style>` element and otherwise leaves its children untouched.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Font stack shared by headings and body text in the default theme.
pub const DEFAULT_FONT_STACK: &str =
    "Inter, system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial";

/// Global typography and colour defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Font stack for `h1`..`h6`
    pub heading_font: String,
    /// Font stack for body text
    pub body_font: String,
    /// Page background colour (any CSS colour)
    pub background: String,
    /// Default text colour (any CSS colour)
    pub text_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading_font: DEFAULT_FONT_STACK.into(),
            body_font: DEFAULT_FONT_STACK.into(),
            // white / gray.800
            background: "#FFFFFF".into(),
            text_color: "#1A202C".into(),
        }
    }
}

impl Theme {
    /// Global CSS rules for this theme.
    ///
    /// Values are written as-is except that `<`, `>`, `{`, `}` and `;` are
    /// stripped, so a config value cannot end its declaration, close the
    /// rule or close the surrounding `<style>`.
    pub fn to_css(&self) -> String {
        format!(
            "body {{ background: {bg}; color: {fg}; font-family: {body}; }}\n\
             h1, h2, h3, h4, h5, h6 {{ font-family: {heading}; }}\n",
            bg = sanitize(&self.background),
            fg = sanitize(&self.text_color),
            body = sanitize(&self.body_font),
            heading = sanitize(&self.heading_font),
        )
    }
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Emits the theme's global styles ahead of `children`.
///
/// Adds no wrapper element: the children render exactly as they would
/// without the provider.
#[component]
pub fn ThemeProvider(
    /// Typography and colours to apply
    theme: Theme,
    /// Content rendered after the style element
    children: Children,
) -> impl IntoView {
    tracing::debug!(background = %theme.background, "applying theme");
    view! {
        <style data-theme="storefront">{theme.to_css()}</style>
        {children()}
    }
}
