//! Role- and text-based queries over rendered HTML.
//!
//! The queries mirror how a user perceives the page: by role and
//! accessible name, by visible text, by placeholder. They work on any HTML
//! string, so they serve both the test suite and `jwshop check`.
//!
//! # Example
//!
//! ```rust
//! use storefront_leptos::inspect::{NameMatch, Role, Screen};
//!
//! let screen = Screen::parse("<nav><h2>JWShop</h2><button aria-label=\"menu\"></button></nav>");
//! assert_eq!(screen.all_by_role(Role::Heading, &NameMatch::exact("JWShop")).len(), 1);
//! assert!(screen.by_role(Role::Button, &NameMatch::exact("menu")).is_ok());
//! ```

use std::fmt;

use scraper::{ElementRef, Html, node::Element};
use thiserror::Error;

/// Query failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InspectError {
    /// No element matched.
    #[error("no element matches {query}")]
    NotFound {
        /// Human-readable query description
        query: String,
    },
    /// A single-element query matched several elements.
    #[error("{count} elements match {query}, expected one")]
    Ambiguous {
        /// Human-readable query description
        query: String,
        /// Number of matches
        count: usize,
    },
}

/// Implicit ARIA roles recognised by the queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `h1`..`h6`
    Heading,
    /// `button`, `input[type=button|submit|reset]`
    Button,
    /// `a[href]`
    Link,
    /// Text-like `input`, `textarea`
    Textbox,
    /// `nav`
    Navigation,
    /// `footer`
    ContentInfo,
}

impl Role {
    /// ARIA role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Heading => "heading",
            Role::Button => "button",
            Role::Link => "link",
            Role::Textbox => "textbox",
            Role::Navigation => "navigation",
            Role::ContentInfo => "contentinfo",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "heading" => Some(Role::Heading),
            "button" => Some(Role::Button),
            "link" => Some(Role::Link),
            "textbox" => Some(Role::Textbox),
            "navigation" => Some(Role::Navigation),
            "contentinfo" => Some(Role::ContentInfo),
            _ => None,
        }
    }

    /// Role of an element: explicit `role` attribute first, then the tag.
    pub fn of(element: &Element) -> Option<Self> {
        if let Some(explicit) = element.attr("role") {
            return Role::parse(explicit.trim());
        }
        match element.name() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Role::Heading),
            "button" => Some(Role::Button),
            "a" if element.attr("href").is_some() => Some(Role::Link),
            "textarea" => Some(Role::Textbox),
            "input" => match element.attr("type").map(str::to_ascii_lowercase).as_deref() {
                None | Some("text" | "email" | "search" | "tel" | "url") => Some(Role::Textbox),
                Some("button" | "submit" | "reset") => Some(Role::Button),
                _ => None,
            },
            "nav" => Some(Role::Navigation),
            "footer" => Some(Role::ContentInfo),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a name or text is compared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameMatch {
    /// Any name.
    Any,
    /// Whole normalised string, case-sensitive.
    Exact(String),
    /// Case-insensitive substring.
    Contains(String),
}

impl NameMatch {
    /// Exact match.
    pub fn exact(text: impl Into<String>) -> Self {
        NameMatch::Exact(text.into())
    }

    /// Case-insensitive substring match.
    pub fn contains(text: impl Into<String>) -> Self {
        NameMatch::Contains(text.into())
    }

    /// Whether `candidate` (already normalised) matches.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            NameMatch::Any => true,
            NameMatch::Exact(expected) => candidate == normalize(expected),
            NameMatch::Contains(needle) => candidate
                .to_lowercase()
                .contains(&normalize(needle).to_lowercase()),
        }
    }
}

impl fmt::Display for NameMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameMatch::Any => f.write_str("any name"),
            NameMatch::Exact(text) => write!(f, "\"{}\"", text),
            NameMatch::Contains(text) => write!(f, "/{}/i", text),
        }
    }
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Elements whose text never counts as visible content.
const IGNORED_TEXT_TAGS: [&str; 4] = ["script", "style", "title", "head"];

/// A parsed document.
pub struct Screen {
    document: Html,
}

impl Screen {
    /// Parse a full document or a fragment.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Queries over the whole document.
    pub fn scope(&self) -> Scope<'_> {
        Scope {
            root: self.document.root_element(),
        }
    }

    /// See [`Scope::all_by_role`].
    pub fn all_by_role(&self, role: Role, name: &NameMatch) -> Vec<Found<'_>> {
        self.scope().all_by_role(role, name)
    }

    /// See [`Scope::by_role`].
    pub fn by_role(&self, role: Role, name: &NameMatch) -> Result<Found<'_>, InspectError> {
        self.scope().by_role(role, name)
    }

    /// See [`Scope::all_by_text`].
    pub fn all_by_text(&self, text: &NameMatch) -> Vec<Found<'_>> {
        self.scope().all_by_text(text)
    }

    /// See [`Scope::by_text`].
    pub fn by_text(&self, text: &NameMatch) -> Result<Found<'_>, InspectError> {
        self.scope().by_text(text)
    }

    /// See [`Scope::by_placeholder`].
    pub fn by_placeholder(&self, placeholder: &str) -> Result<Found<'_>, InspectError> {
        self.scope().by_placeholder(placeholder)
    }

    /// See [`Scope::outline`].
    pub fn outline(&self) -> Vec<String> {
        self.scope().outline()
    }
}

/// Queries restricted to the descendants of one element.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
    root: ElementRef<'a>,
}

impl<'a> Scope<'a> {
    fn elements(&self) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        let root_id = self.root.id();
        self.root
            .descendants()
            .filter(move |node| node.id() != root_id)
            .filter_map(ElementRef::wrap)
    }

    /// Every element with `role` whose accessible name matches, in document order.
    pub fn all_by_role(&self, role: Role, name: &NameMatch) -> Vec<Found<'a>> {
        self.elements()
            .map(Found::new)
            .filter(|found| found.role() == Some(role) && name.matches(&found.name()))
            .collect()
    }

    /// The single element with `role` and a matching name.
    pub fn by_role(&self, role: Role, name: &NameMatch) -> Result<Found<'a>, InspectError> {
        single(
            self.all_by_role(role, name),
            format!("role {} named {}", role, name),
        )
    }

    /// Every element whose own text nodes match, in document order.
    pub fn all_by_text(&self, text: &NameMatch) -> Vec<Found<'a>> {
        self.elements()
            .filter(|el| !in_ignored_subtree(el))
            .map(Found::new)
            .filter(|found| {
                let own = found.own_text();
                !own.is_empty() && text.matches(&own)
            })
            .collect()
    }

    /// The single element whose own text matches.
    pub fn by_text(&self, text: &NameMatch) -> Result<Found<'a>, InspectError> {
        single(self.all_by_text(text), format!("text {}", text))
    }

    /// The single element whose `placeholder` attribute equals `placeholder`.
    pub fn by_placeholder(&self, placeholder: &str) -> Result<Found<'a>, InspectError> {
        let matches = self
            .elements()
            .filter(|el| el.value().attr("placeholder") == Some(placeholder))
            .map(Found::new)
            .collect();
        single(matches, format!("placeholder \"{}\"", placeholder))
    }

    /// Structural outline: one `role: name` line per heading, button and
    /// textbox, in document order.
    pub fn outline(&self) -> Vec<String> {
        self.elements()
            .map(Found::new)
            .filter_map(|found| match found.role() {
                Some(role @ (Role::Heading | Role::Button | Role::Textbox)) => {
                    Some(format!("{}: {}", role, found.name()))
                }
                _ => None,
            })
            .collect()
    }
}

fn single<'a>(mut matches: Vec<Found<'a>>, query: String) -> Result<Found<'a>, InspectError> {
    match matches.len() {
        0 => Err(InspectError::NotFound { query }),
        1 => Ok(matches.remove(0)),
        count => Err(InspectError::Ambiguous { query, count }),
    }
}

fn in_ignored_subtree(el: &ElementRef<'_>) -> bool {
    IGNORED_TEXT_TAGS.contains(&el.value().name())
        || el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| IGNORED_TEXT_TAGS.contains(&ancestor.value().name()))
}

/// A matched element.
#[derive(Clone, Copy)]
pub struct Found<'a> {
    element: ElementRef<'a>,
}

impl<'a> Found<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Tag name.
    pub fn tag(&self) -> &'a str {
        self.element.value().name()
    }

    /// Attribute value.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Role of the element, if it has one.
    pub fn role(&self) -> Option<Role> {
        Role::of(self.element.value())
    }

    /// Normalised text of the whole subtree.
    pub fn text(&self) -> String {
        normalize(&self.element.text().collect::<String>())
    }

    /// Normalised text of the element's direct text children only.
    pub fn own_text(&self) -> String {
        let own: String = self
            .element
            .children()
            .filter_map(|node| node.value().as_text().map(|text| &**text))
            .collect();
        normalize(&own)
    }

    /// Accessible name: `aria-label`, then text content, then `title` and
    /// `placeholder` for elements without text.
    pub fn name(&self) -> String {
        if let Some(label) = self.attr("aria-label") {
            return normalize(label);
        }
        let text = self.text();
        if !text.is_empty() {
            return text;
        }
        self.attr("title")
            .or_else(|| self.attr("placeholder"))
            .map(normalize)
            .unwrap_or_default()
    }

    /// Interactive and not disabled.
    pub fn is_enabled(&self) -> bool {
        self.attr("disabled").is_none() && self.attr("aria-disabled") != Some("true")
    }

    /// Queries over this element's descendants.
    pub fn scope(&self) -> Scope<'a> {
        Scope { root: self.element }
    }

    /// Parent element.
    pub fn parent(&self) -> Option<Found<'a>> {
        self.element.parent().and_then(ElementRef::wrap).map(Found::new)
    }

    /// Queries scoped to the nearest enclosing `section`, else the parent
    /// element, else this element.
    pub fn within(&self) -> Scope<'a> {
        let ancestors: Vec<ElementRef<'a>> =
            self.element.ancestors().filter_map(ElementRef::wrap).collect();
        let root = ancestors
            .iter()
            .find(|ancestor| ancestor.value().name() == "section")
            .or_else(|| ancestors.first())
            .copied()
            .unwrap_or(self.element);
        Scope { root }
    }
}

impl fmt::Debug for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Found")
            .field("tag", &self.tag())
            .field("name", &self.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html><head><title>Shop title</title><style>.x { }</style></head>
        <body>
            <nav><h2>Brand</h2><a>Home</a><a href="/about">About</a></nav>
            <section>
                <h1>  Big
                    heading </h1>
                <p>Some <b>bold</b> text</p>
                <button type="button">Go</button>
                <button type="button" disabled>Stop</button>
            </section>
            <section><h2>Other</h2><button>Go</button></section>
            <footer><input type="email" placeholder="Email" /></footer>
        </body></html>
    "#;

    #[test]
    fn roles_from_tags() {
        let screen = Screen::parse(SAMPLE);
        assert_eq!(screen.all_by_role(Role::Heading, &NameMatch::Any).len(), 3);
        assert_eq!(screen.all_by_role(Role::Link, &NameMatch::Any).len(), 1);
        assert!(screen.by_role(Role::Navigation, &NameMatch::Any).is_ok());
        assert!(screen.by_role(Role::ContentInfo, &NameMatch::Any).is_ok());
        assert_eq!(
            screen.by_role(Role::Textbox, &NameMatch::Any).map(|f| f.name()),
            Ok("Email".to_string())
        );
    }

    #[test]
    fn names_are_normalised() {
        let screen = Screen::parse(SAMPLE);
        assert!(screen.by_role(Role::Heading, &NameMatch::exact("Big heading")).is_ok());
        assert!(screen.by_role(Role::Heading, &NameMatch::contains("BIG")).is_ok());
    }

    #[test]
    fn ambiguous_and_missing_queries() {
        let screen = Screen::parse(SAMPLE);
        assert_eq!(
            screen.by_role(Role::Button, &NameMatch::exact("Go")).map(|f| f.tag()),
            Err(InspectError::Ambiguous {
                query: "role button named \"Go\"".into(),
                count: 2
            })
        );
        assert!(matches!(
            screen.by_role(Role::Button, &NameMatch::exact("Nope")),
            Err(InspectError::NotFound { .. })
        ));
    }

    #[test]
    fn text_queries_use_own_text_and_skip_head() {
        let screen = Screen::parse(SAMPLE);
        assert!(screen.by_text(&NameMatch::exact("bold")).is_ok());
        assert!(screen.by_text(&NameMatch::exact("Some text")).is_ok());
        assert!(screen.all_by_text(&NameMatch::contains("Shop title")).is_empty());
    }

    #[test]
    fn within_scopes_to_section() {
        let screen = Screen::parse(SAMPLE);
        let heading = screen.by_role(Role::Heading, &NameMatch::exact("Other")).expect("heading");
        let scope = heading.within();
        assert_eq!(scope.all_by_role(Role::Button, &NameMatch::Any).len(), 1);
        assert!(scope.by_role(Role::Heading, &NameMatch::exact("Big heading")).is_err());
    }

    #[test]
    fn disabled_buttons_are_reported() {
        let screen = Screen::parse(SAMPLE);
        let stop = screen.by_role(Role::Button, &NameMatch::exact("Stop")).expect("stop");
        assert!(!stop.is_enabled());
    }

    #[test]
    fn outline_in_document_order() {
        let screen = Screen::parse(SAMPLE);
        assert_eq!(
            screen.outline(),
            vec![
                "heading: Brand",
                "heading: Big heading",
                "button: Go",
                "button: Stop",
                "heading: Other",
                "button: Go",
                "textbox: Email",
            ]
        );
    }
}
