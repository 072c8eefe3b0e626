//! Landing page tests: content, structure and interaction invariants
//! checked on the rendered document.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use storefront_leptos::catalog::NAV_LINKS;
use storefront_leptos::components::SplitSection;
use storefront_leptos::contract;
use storefront_leptos::inspect::{NameMatch, Role, Screen};
use storefront_leptos::newsletter::NewsletterDraft;
use storefront_leptos::types::{MEDIUM_BREAKPOINT_PX, Viewport};
use storefront_leptos::{PageOptions, render_home, render_page, render_page_with};

fn wide_page() -> Screen {
    Screen::parse(&render_page(&PageOptions::default()))
}

/// Feed `text` into the draft one keystroke at a time, the way the browser
/// fires `input` events while typing.
fn type_into(draft: &NewsletterDraft, text: &str) {
    let mut typed = draft.value();
    for ch in text.chars() {
        typed.push(ch);
        draft.record_input(typed.clone());
    }
}

mod snapshot {
    use super::*;
    use pretty_assertions::assert_eq;

    const WIDE_OUTLINE: [&str; 16] = [
        "heading: JWShop",
        "heading: A Unique Watch That Fits Your Style",
        "button: Learn More",
        "button: View",
        "heading: Ideal Has Never Been Closer",
        "button: Learn More",
        "heading: Our Bestsellers",
        "button: Show all",
        "button: View",
        "heading: Swiss Essence",
        "button: Learn More",
        "heading: Journal & Blog",
        "button: Read more",
        "heading: JWShop",
        "textbox: Email",
        "button: Send",
    ];

    #[test]
    fn wide_page_matches_outline() {
        assert_eq!(wide_page().outline(), WIDE_OUTLINE.to_vec());
    }

    #[test]
    fn narrow_page_adds_menu_button() {
        let screen = Screen::parse(&render_page(&PageOptions::for_width(375)));
        let outline = screen.outline();
        assert_eq!(outline[0], "heading: JWShop");
        assert_eq!(outline[1], "button: menu");
        assert_eq!(outline.len(), 17);
    }

    #[test]
    fn rendering_is_stable_across_renders() {
        let options = PageOptions::default();
        assert_eq!(render_page(&options), render_page(&options));
        assert_eq!(render_home(Viewport::Narrow), render_home(Viewport::Narrow));
    }

    #[test]
    fn full_page_satisfies_contract() {
        for width in [320, MEDIUM_BREAKPOINT_PX - 1, MEDIUM_BREAKPOINT_PX, 1440] {
            let report = contract::verify(&render_page(&PageOptions::for_width(width)));
            assert!(
                report.is_satisfied(),
                "width {}: {:?}",
                width,
                report.violations
            );
        }
    }
}

mod navigation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_all_navigation_links() {
        let screen = wide_page();
        for link in &NAV_LINKS {
            assert!(
                !screen.all_by_text(&NameMatch::exact(link.label)).is_empty(),
                "missing {}",
                link.label
            );
        }
    }

    #[test]
    fn wide_viewports_show_links_not_menu() {
        for width in [MEDIUM_BREAKPOINT_PX, 1024, 1920] {
            let screen = Screen::parse(&render_page(&PageOptions::for_width(width)));
            let nav = screen.by_role(Role::Navigation, &NameMatch::Any).expect("nav");
            let scope = nav.scope();
            assert!(scope.by_role(Role::Button, &NameMatch::exact("menu")).is_err());
            for link in &NAV_LINKS {
                assert_eq!(scope.all_by_text(&NameMatch::exact(link.label)).len(), 1);
            }
        }
    }

    #[test]
    fn narrow_viewports_show_menu_not_links() {
        for width in [0, 320, 375, MEDIUM_BREAKPOINT_PX - 1] {
            let screen = Screen::parse(&render_page(&PageOptions::for_width(width)));
            let nav = screen.by_role(Role::Navigation, &NameMatch::Any).expect("nav");
            let scope = nav.scope();
            let menu = scope
                .by_role(Role::Button, &NameMatch::exact("menu"))
                .expect("menu button");
            assert!(menu.is_enabled());
            for link in &NAV_LINKS {
                assert!(scope.all_by_text(&NameMatch::exact(link.label)).is_empty());
            }
        }
    }
}

mod hero {
    use super::*;

    #[test]
    fn renders_heading_text_and_buttons() {
        let screen = wide_page();
        let heading = screen
            .by_role(
                Role::Heading,
                &NameMatch::contains("A Unique Watch That Fits Your Style"),
            )
            .expect("hero heading");
        let hero = heading.within();
        assert!(hero
            .by_text(&NameMatch::contains("Lawson collection is already here"))
            .is_ok());
        assert!(hero.by_role(Role::Button, &NameMatch::exact("Learn More")).is_ok());
        assert!(hero.by_role(Role::Button, &NameMatch::exact("View")).is_ok());
    }
}

mod split_sections {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ideal_section_has_heading_and_cta() {
        let screen = wide_page();
        let heading = screen
            .by_role(Role::Heading, &NameMatch::contains("Ideal Has Never Been Closer"))
            .expect("ideal heading");
        assert!(heading
            .within()
            .by_role(Role::Button, &NameMatch::exact("Learn More"))
            .is_ok());
    }

    #[test]
    fn swiss_section_heading() {
        assert!(wide_page()
            .by_role(Role::Heading, &NameMatch::contains("swiss essence"))
            .is_ok());
    }

    #[test]
    fn cta_defaults_to_learn_more() {
        let owner = Owner::new_root(None);
        let html = owner.with(|| view! { <SplitSection title="Title" text="Body" /> }.to_html());
        let screen = Screen::parse(&html);
        assert!(screen.by_role(Role::Button, &NameMatch::exact("Learn More")).is_ok());
    }

    #[test]
    fn custom_cta_label() {
        let owner = Owner::new_root(None);
        let html = owner.with(|| {
            view! { <SplitSection title="Title" text="Body" cta="Discover" /> }
                .to_html()
        });
        let screen = Screen::parse(&html);
        assert!(screen.by_role(Role::Button, &NameMatch::exact("Discover")).is_ok());
        assert!(screen.by_role(Role::Button, &NameMatch::exact("Learn More")).is_err());
    }

    #[test]
    fn empty_title_renders_empty_heading() {
        let owner = Owner::new_root(None);
        let html = owner.with(|| view! { <SplitSection title="" text="" /> }.to_html());
        let screen = Screen::parse(&html);
        let heading = screen.by_role(Role::Heading, &NameMatch::Any).expect("heading");
        assert_eq!(heading.name(), "");
        assert!(screen.by_role(Role::Button, &NameMatch::exact("Learn More")).is_ok());
    }
}

mod bestsellers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_products_and_single_discount() {
        let screen = wide_page();
        for title in [
            "Gold chunky paperclip link chain",
            "Sterling silver criss cross ring",
            "Ear cuff with cubic zirconias",
            "Set of two gold stacking layering necklaces",
        ] {
            assert!(screen.by_text(&NameMatch::contains(title)).is_ok(), "{}", title);
        }
        let discount = screen.by_text(&NameMatch::exact("-10%")).expect("discount");
        assert_eq!(discount.attr("class"), Some("price-discount"));
        let old = screen.by_text(&NameMatch::exact("28,00 £")).expect("old price");
        assert_eq!(old.attr("class"), Some("price-old"));
        // the discounted product shows the old price, not its current one
        assert!(screen.by_text(&NameMatch::exact("26,00 £")).is_err());
        assert!(screen.by_text(&NameMatch::exact("19,00 £")).is_ok());
    }

    #[test]
    fn renders_action_buttons() {
        let screen = wide_page();
        let section = screen
            .by_role(Role::Heading, &NameMatch::contains("Our Bestsellers"))
            .expect("heading")
            .within();
        assert!(section.by_role(Role::Button, &NameMatch::exact("Show all")).is_ok());
        assert!(section.by_role(Role::Button, &NameMatch::exact("View")).is_ok());
    }

    #[test]
    fn grid_columns_follow_viewport() {
        let wide = render_home(Viewport::Wide);
        assert!(wide.contains("data-columns=\"4\""));
        assert!(wide.contains("data-columns=\"3\""));

        let narrow = render_home(Viewport::Narrow);
        assert_eq!(narrow.matches("data-columns=\"1\"").count(), 2);
    }
}

mod journal {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_posts_and_read_more() {
        let screen = wide_page();
        assert!(screen
            .by_role(Role::Heading, &NameMatch::contains("Journal & Blog"))
            .is_ok());
        let posts = screen.all_by_text(&NameMatch::contains("What Are the Types of Watch Movements"));
        assert_eq!(posts.len(), 3);
        assert_eq!(screen.all_by_text(&NameMatch::exact("26.08.2020")).len(), 3);
        assert!(screen.by_role(Role::Button, &NameMatch::contains("read more")).is_ok());
    }
}

mod footer {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_brand_input_and_send() {
        let screen = wide_page();
        assert_eq!(
            screen.all_by_role(Role::Heading, &NameMatch::exact("JWShop")).len(),
            2
        );
        let input = screen.by_placeholder("Email").expect("email input");
        assert_eq!(input.attr("type"), Some("email"));
        assert!(screen.by_role(Role::Button, &NameMatch::exact("Send")).is_ok());
    }

    #[test]
    fn renders_copyright_with_correct_sign() {
        let html = render_page(&PageOptions::default());
        let screen = Screen::parse(&html);
        assert!(screen.by_text(&NameMatch::contains("©2025 JWShop")).is_ok());
        assert!(!html.contains("Â©"));
        assert!(screen
            .by_text(&NameMatch::exact(
                "Home · About · Blog · Shop · Features · Contacts · Instant Quote"
            ))
            .is_ok());
    }

    #[test]
    fn links_stay_in_markup_but_hide_on_narrow() {
        for (viewport, hidden) in [(Viewport::Narrow, true), (Viewport::Wide, false)] {
            let screen = Screen::parse(&render_home(viewport));
            let footer = screen.by_role(Role::ContentInfo, &NameMatch::Any).expect("footer");
            let home = footer
                .scope()
                .by_text(&NameMatch::exact("Home"))
                .expect("footer link");
            let row = home.parent().expect("link row");
            assert_eq!(row.attr("class"), Some("footer-links"));
            assert_eq!(row.attr("hidden").is_some(), hidden);
        }
    }
}

mod interactions {
    use super::*;
    use pretty_assertions::assert_eq;

    fn email_value(draft: NewsletterDraft) -> Option<String> {
        let html = render_page_with(&PageOptions::default(), Some(draft));
        let screen = Screen::parse(&html);
        let input = screen.by_placeholder("Email").expect("email input");
        input.attr("value").map(str::to_string)
    }

    #[test]
    fn typing_updates_email_value() {
        let draft = NewsletterDraft::new();
        type_into(&draft, "test@example.com");
        assert_eq!(email_value(draft).as_deref(), Some("test@example.com"));
    }

    #[test]
    fn retyping_after_clear_is_idempotent() {
        let draft = NewsletterDraft::new();
        type_into(&draft, "test@example.com");
        draft.clear();
        type_into(&draft, "test@example.com");
        assert_eq!(draft.value(), "test@example.com");
        assert_eq!(email_value(draft).as_deref(), Some("test@example.com"));
    }

    #[test]
    fn arbitrary_input_is_not_validated() {
        let draft = NewsletterDraft::new();
        type_into(&draft, "not an email <>&\" ✓");
        assert_eq!(email_value(draft).as_deref(), Some("not an email <>&\" ✓"));
    }

    #[test]
    fn cta_and_send_buttons_stay_enabled() {
        let screen = wide_page();
        let learn_more = screen.all_by_role(Role::Button, &NameMatch::exact("Learn More"));
        let view = screen.all_by_role(Role::Button, &NameMatch::exact("View"));
        let send = screen.by_role(Role::Button, &NameMatch::exact("Send")).expect("send");
        assert_eq!(learn_more.len(), 3);
        assert_eq!(view.len(), 2);
        for button in [learn_more[0], view[0], send] {
            assert!(button.is_enabled(), "{:?}", button);
            assert_eq!(button.attr("type"), Some("button"));
            assert!(button.attr("onclick").is_none());
        }
    }
}
