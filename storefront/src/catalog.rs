//! Literal page content.
//!
//! All lists are `static` slices so every render walks the same records in
//! the same order.

use crate::types::{NavLink, Post, Pricing, Product, SplitCopy};

/// Brand name shown in the nav bar and the footer.
pub const BRAND: &str = "JWShop";

/// Footer copyright line. The `©` is U+00A9.
pub const COPYRIGHT: &str = "\u{a9}2025 JWShop";

/// Label used by split sections that do not set their own CTA.
pub const DEFAULT_CTA: &str = "Learn More";

/// Teaser above the newsletter input.
pub const NEWSLETTER_TEASER: &str = "Lorem ipsum dolor sit amet";

/// Placeholder of the newsletter input.
pub const EMAIL_PLACEHOLDER: &str = "Email";

/// Separator of the footer link summary line.
pub const SUMMARY_SEPARATOR: &str = " \u{b7} ";

/// Nav labels, in display order; shared by the nav bar and the footer.
pub static NAV_LINKS: [NavLink; 7] = [
    NavLink { label: "Home" },
    NavLink { label: "About" },
    NavLink { label: "Blog" },
    NavLink { label: "Shop" },
    NavLink { label: "Features" },
    NavLink { label: "Contacts" },
    NavLink { label: "Instant Quote" },
];

/// Products of the bestseller grid.
pub static BESTSELLERS: [Product; 4] = [
    Product {
        title: "Gold chunky paperclip link chain",
        pricing: Pricing::Regular { price: "19,00 £" },
    },
    Product {
        title: "Sterling silver criss cross ring",
        pricing: Pricing::Regular { price: "23,00 £" },
    },
    Product {
        title: "Ear cuff with cubic zirconias",
        pricing: Pricing::Regular { price: "8,00 £" },
    },
    Product {
        title: "Set of two gold stacking layering necklaces",
        pricing: Pricing::Discounted {
            price: "26,00 £",
            old_price: "28,00 £",
            discount_label: "-10%",
        },
    },
];

const WATCH_MOVEMENTS: Post = Post {
    date: "26.08.2020",
    title: "What Are the Types of Watch Movements?",
};

/// Posts of the journal grid.
///
/// Three copies of the same teaser; the journal has no distinct posts yet.
pub static JOURNAL_POSTS: [Post; 3] = [WATCH_MOVEMENTS, WATCH_MOVEMENTS, WATCH_MOVEMENTS];

/// Hero heading.
pub const HERO_TITLE: &str = "A Unique Watch That Fits Your Style";

/// Hero marketing copy.
pub const HERO_TEXT: &str = "The new Lawson collection is already here! This quartz Lawson Franklin \
38 model, designed with simplicity and elegance, is truly a cherry on the cake. Comes in \
different sizes and band colors, has a stainless steel back for a personalized engraving.";

/// First split section, after the hero.
pub static IDEAL_SECTION: SplitCopy = SplitCopy {
    title: "Ideal Has Never Been Closer",
    text: "Have you ever come across a thing that is impossible to resist? Meet the Lawson \
Jefferson 38! Run by the vibration of a quartz crystal (32,786 times per second) under current \
to keep possibly accurate time. You will feel absolutely over the moon with it, we guarantee!",
    cta: Some(DEFAULT_CTA),
};

/// Second split section, after the bestsellers.
pub static SWISS_SECTION: SplitCopy = SplitCopy {
    title: "Swiss Essence",
    text: "The first association that comes to one\u{2019}s mind with the phrase \u{201c}a good \
wristwatch\u{201d} is naturally a one made somewhere in Switzerland. Do you want to know what \
makes Swiss watches stand out?",
    cta: Some(DEFAULT_CTA),
};

/// The footer's one-line summary of the nav labels.
pub fn nav_summary() -> String {
    NAV_LINKS
        .iter()
        .map(|link| link.label)
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_summary_lists_labels_in_order() {
        assert_eq!(
            nav_summary(),
            "Home \u{b7} About \u{b7} Blog \u{b7} Shop \u{b7} Features \u{b7} Contacts \u{b7} Instant Quote"
        );
    }

    #[test]
    fn exactly_one_discounted_bestseller() {
        let discounted: Vec<_> = BESTSELLERS.iter().filter(|p| p.is_discounted()).collect();
        assert_eq!(discounted.len(), 1);
        assert_eq!(
            discounted[0].title,
            "Set of two gold stacking layering necklaces"
        );
    }

    #[test]
    fn journal_posts_are_identical() {
        assert!(JOURNAL_POSTS.iter().all(|p| *p == JOURNAL_POSTS[0]));
    }

    #[test]
    fn copyright_uses_single_codepoint_sign() {
        assert!(COPYRIGHT.starts_with('\u{a9}'));
        assert!(!COPYRIGHT.contains('\u{c2}'));
        assert_eq!(COPYRIGHT, "©2025 JWShop");
    }
}
