//! Markup contract of the landing page.
//!
//! [`verify`] checks a rendered document against the content and
//! structure every build of the page must expose, and against the
//! interaction invariants visible in markup: all buttons enabled, the email
//! field free of length or pattern limits.

use std::fmt;

use crate::catalog::{
    BESTSELLERS, BRAND, EMAIL_PLACEHOLDER, HERO_TITLE, IDEAL_SECTION, JOURNAL_POSTS, NAV_LINKS,
    SWISS_SECTION,
};
use crate::inspect::{NameMatch, Role, Screen};

/// Mis-encoded copyright sign (UTF-8 bytes of `©` read as Latin-1).
const MOJIBAKE_COPYRIGHT: &str = "\u{c2}\u{a9}";

/// One broken rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Short rule identifier, e.g. `hero-heading`
    pub rule: &'static str,
    /// What was found instead
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.detail)
    }
}

/// Result of [`verify`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractReport {
    /// Number of rules evaluated
    pub checked: usize,
    /// Broken rules, in evaluation order
    pub violations: Vec<Violation>,
}

impl ContractReport {
    /// No rule is broken.
    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }

    fn check(&mut self, rule: &'static str, ok: bool, detail: impl FnOnce() -> String) {
        self.checked += 1;
        if !ok {
            self.violations.push(Violation {
                rule,
                detail: detail(),
            });
        }
    }

    fn expect_count(&mut self, rule: &'static str, what: &str, found: usize, expected: usize) {
        self.check(rule, found == expected, || {
            format!("expected {} {}, found {}", expected, what, found)
        });
    }
}

/// Check `html` against the landing page contract.
pub fn verify(html: &str) -> ContractReport {
    let screen = Screen::parse(html);
    let mut report = ContractReport::default();

    let hero = screen.all_by_role(Role::Heading, &NameMatch::contains(HERO_TITLE));
    report.expect_count("hero-heading", "hero headings", hero.len(), 1);
    if let Some(hero) = hero.first() {
        let scope = hero.within();
        for label in ["Learn More", "View"] {
            let found = scope.all_by_role(Role::Button, &NameMatch::exact(label)).len();
            report.check("hero-buttons", found >= 1, || {
                format!("hero has no \"{}\" button", label)
            });
        }
    }

    let ideal = screen.all_by_role(Role::Heading, &NameMatch::contains(IDEAL_SECTION.title));
    report.expect_count("ideal-heading", "\"Ideal\" headings", ideal.len(), 1);
    if let Some(ideal) = ideal.first() {
        let found = ideal
            .within()
            .all_by_role(Role::Button, &NameMatch::exact("Learn More"))
            .len();
        report.check("ideal-cta", found >= 1, || {
            "\"Ideal\" section has no \"Learn More\" button".into()
        });
    }

    let swiss = screen.all_by_role(Role::Heading, &NameMatch::contains(SWISS_SECTION.title));
    report.check("swiss-heading", !swiss.is_empty(), || {
        "no \"Swiss Essence\" heading".into()
    });

    for product in &BESTSELLERS {
        let found = screen.all_by_text(&NameMatch::contains(product.title)).len();
        report.check("product-title", found >= 1, || {
            format!("product \"{}\" missing", product.title)
        });
    }
    let discounts = screen.all_by_text(&NameMatch::exact("-10%")).len();
    report.expect_count("discount-label", "\"-10%\" labels", discounts, 1);

    let bestsellers = screen.all_by_role(Role::Heading, &NameMatch::contains("Bestsellers"));
    report.check("bestsellers-heading", bestsellers.len() == 1, || {
        format!("expected 1 bestsellers heading, found {}", bestsellers.len())
    });
    if let Some(heading) = bestsellers.first() {
        let scope = heading.within();
        for label in ["Show all", "View"] {
            let found = scope.all_by_role(Role::Button, &NameMatch::exact(label)).len();
            report.check("bestsellers-buttons", found >= 1, || {
                format!("bestsellers section has no \"{}\" button", label)
            });
        }
    }

    let journal = screen.all_by_role(Role::Heading, &NameMatch::contains("Journal & Blog"));
    report.expect_count("journal-heading", "journal headings", journal.len(), 1);
    if let Some(post) = JOURNAL_POSTS.first() {
        let posts = screen.all_by_text(&NameMatch::contains(post.title)).len();
        report.expect_count("journal-posts", "post titles", posts, JOURNAL_POSTS.len());
    }
    let read_more = screen
        .all_by_role(Role::Button, &NameMatch::contains("Read more"))
        .len();
    report.expect_count("read-more", "\"Read more\" controls", read_more, 1);

    let brands = screen.all_by_role(Role::Heading, &NameMatch::exact(BRAND)).len();
    report.expect_count("brand-headings", "\"JWShop\" headings", brands, 2);

    match screen.by_placeholder(EMAIL_PLACEHOLDER) {
        Ok(input) => {
            let limits: Vec<&str> = ["maxlength", "pattern", "required", "disabled", "readonly"]
                .into_iter()
                .filter(|attr| input.attr(attr).is_some())
                .collect();
            report.check("email-unrestricted", limits.is_empty(), || {
                format!("email input restricts entry with {}", limits.join(", "))
            });
        }
        Err(err) => report.check("email-input", false, || err.to_string()),
    }

    let send = screen.all_by_role(Role::Button, &NameMatch::exact("Send")).len();
    report.expect_count("send-button", "\"Send\" buttons", send, 1);

    let copyright = screen.all_by_text(&NameMatch::contains("\u{a9}2025 JWShop")).len();
    report.check("copyright", copyright >= 1, || {
        "no \"\u{a9}2025 JWShop\" line".into()
    });
    report.check("copyright-encoding", !html.contains(MOJIBAKE_COPYRIGHT), || {
        "document contains a mis-encoded copyright sign".into()
    });

    for link in &NAV_LINKS {
        let found = screen.all_by_text(&NameMatch::exact(link.label)).len();
        report.check("nav-label", found >= 1, || {
            format!("nav label \"{}\" missing", link.label)
        });
    }

    let disabled: Vec<String> = screen
        .all_by_role(Role::Button, &NameMatch::Any)
        .into_iter()
        .filter(|button| !button.is_enabled())
        .map(|button| button.name())
        .collect();
    report.check("buttons-enabled", disabled.is_empty(), || {
        format!("disabled buttons: {}", disabled.join(", "))
    });

    tracing::debug!(
        checked = report.checked,
        violations = report.violations.len(),
        "contract verified"
    );
    report
}
