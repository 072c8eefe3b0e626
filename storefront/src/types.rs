//! Data types for the landing page content and layout.
//!
//! Everything here is plain, immutable data. Records borrow `'static`
//! strings because the whole catalog is literal and lives for the
//! program's lifetime (see [`crate::catalog`]).
//!
//! # Example
//!
//! ```rust
//! use storefront_leptos::types::{classify_viewport, Viewport};
//!
//! assert_eq!(classify_viewport(375), Viewport::Narrow);
//! assert_eq!(classify_viewport(1280), Viewport::Wide);
//! assert_eq!(Viewport::Wide.grid_columns(4), 4);
//! ```

use serde::Serialize;

/// Viewport width (in CSS pixels) at which the expanded layout starts.
///
/// Matches the `md` breakpoint of 48em at a 16px root font size.
pub const MEDIUM_BREAKPOINT_PX: u32 = 768;

/// Layout class of the current viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Below the medium breakpoint: stacked layout, menu icon in the nav.
    Narrow,
    /// At or above the medium breakpoint: multi-column layout, inline nav links.
    #[default]
    Wide,
}

/// Classify a viewport width into a [`Viewport`].
pub fn classify_viewport(width_px: u32) -> Viewport {
    if width_px < MEDIUM_BREAKPOINT_PX {
        Viewport::Narrow
    } else {
        Viewport::Wide
    }
}

impl Viewport {
    /// Number of grid columns for a grid that shows `wide` columns on wide screens.
    pub fn grid_columns(self, wide: usize) -> usize {
        match self {
            Viewport::Narrow => 1,
            Viewport::Wide => wide.max(1),
        }
    }

    /// Whether this is the compact layout.
    pub fn is_narrow(self) -> bool {
        self == Viewport::Narrow
    }

    /// Stable lowercase name, used for `data-viewport` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Viewport::Narrow => "narrow",
            Viewport::Wide => "wide",
        }
    }
}

/// A placeholder navigation entry. Nav links never navigate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible label
    pub label: &'static str,
}

/// Pricing of a bestseller product.
///
/// An old price only ever exists together with a discount label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pricing {
    /// Sold at its list price.
    Regular {
        /// Formatted price, e.g. `"19,00 £"`
        price: &'static str,
    },
    /// Sold with a discount.
    Discounted {
        /// Current formatted price
        price: &'static str,
        /// Formatted price before the discount
        old_price: &'static str,
        /// Discount badge, e.g. `"-10%"`
        discount_label: &'static str,
    },
}

/// What a product card shows in its price line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceDisplay {
    /// The plain price.
    Plain(&'static str),
    /// The struck-through old price followed by the discount label.
    Struck {
        /// Old price, rendered with a line-through
        old: &'static str,
        /// Discount label, rendered in the accent colour
        label: &'static str,
    },
}

/// A product card in the bestseller grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Product name
    pub title: &'static str,
    /// Price information
    pub pricing: Pricing,
}

impl Product {
    /// The price line for this product.
    ///
    /// Discounted products show the old price and the label instead of the
    /// current price.
    pub fn displayed_price(&self) -> PriceDisplay {
        match self.pricing {
            Pricing::Regular { price } => PriceDisplay::Plain(price),
            Pricing::Discounted {
                old_price,
                discount_label,
                ..
            } => PriceDisplay::Struck {
                old: old_price,
                label: discount_label,
            },
        }
    }

    /// Whether the product carries a discount.
    pub fn is_discounted(&self) -> bool {
        matches!(self.pricing, Pricing::Discounted { .. })
    }
}

/// A journal/blog teaser card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Formatted publication date, e.g. `"26.08.2020"`
    pub date: &'static str,
    /// Post title
    pub title: &'static str,
}

/// Copy for one split section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SplitCopy {
    /// Section heading
    pub title: &'static str,
    /// Body paragraph
    pub text: &'static str,
    /// Button label, `None` falls back to "Learn More"
    pub cta: Option<&'static str>,
}
