//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::Home;
use crate::PageOptions;
use crate::newsletter::NewsletterDraft;
use crate::styles::PAGE_CSS;
use crate::theme::ThemeProvider;

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(
    /// Theme and layout of the render
    options: PageOptions,
    /// Backing state of the email field
    #[prop(optional)]
    newsletter: Option<NewsletterDraft>,
) -> impl IntoView {
    let draft = newsletter.unwrap_or_default();
    let viewport = options.viewport;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"JWShop | Watches and Jewelry"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <ThemeProvider theme=options.theme>
                    <Home viewport=viewport newsletter=draft />
                </ThemeProvider>
            </body>
        </html>
    }
}
