//! CSS for the landing page.
//!
//! Layout only: fonts and page colours come from [`crate::theme::Theme`].
//! Grid column counts are set per render through the `--columns` custom
//! property so the server-chosen viewport wins over the media queries.

/// Complete layout CSS for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --black: #000000;
    --gray-200: #E2E8F0;
    --gray-400: #A0AEC0;
    --gray-500: #718096;
    --gray-600: #4A5568;
    --red-500: #E53E3E;
    --radius: 6px;
    --pad-x: 48px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    line-height: 1.5;
}

h1, h2 {
    margin: 0;
    line-height: 1.2;
}

.page[data-viewport="narrow"] {
    --pad-x: 24px;
}

/* Nav */
.nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 24px var(--pad-x);
}

.nav-brand {
    font-size: 20px;
}

.nav-links {
    display: flex;
    gap: 24px;
}

.nav-link {
    cursor: pointer;
}

.nav-link:hover {
    text-decoration: underline;
}

.menu-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    border: 0;
    border-radius: var(--radius);
    background: #EDF2F7;
    cursor: pointer;
}

.menu-bar {
    display: block;
    width: 18px;
    height: 2px;
    background: var(--black);
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    height: 40px;
    padding: 0 16px;
    border-radius: var(--radius);
    font: inherit;
    font-weight: 600;
    cursor: pointer;
}

.btn-solid {
    border: 1px solid var(--black);
    background: var(--black);
    color: #FFFFFF;
}

.btn-outline {
    border: 1px solid var(--gray-200);
    background: transparent;
    color: inherit;
}

.btn-link {
    height: auto;
    padding: 0;
    border: 0;
    background: none;
    color: inherit;
}

.btn-link:hover {
    text-decoration: underline;
}

.btn-sm {
    height: 28px;
    padding: 0 12px;
    font-size: 14px;
}

.placeholder {
    background: var(--black);
}

/* Hero and split sections */
.hero, .split {
    display: flex;
    align-items: center;
    gap: 32px;
    padding: 48px var(--pad-x);
}

.split {
    padding-top: 40px;
    padding-bottom: 40px;
}

.page[data-viewport="narrow"] .hero,
.page[data-viewport="narrow"] .split {
    flex-direction: column;
}

.hero {
    justify-content: space-between;
}

.hero-content {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 24px;
    max-width: 48%;
}

.hero-title {
    font-size: 48px;
}

.hero-text {
    margin: 0;
    font-size: 18px;
    color: var(--gray-600);
}

.hero-actions, .section-actions {
    display: flex;
    gap: 16px;
}

.hero-visual {
    width: 44%;
    height: 320px;
}

.split-content {
    flex: 1;
}

.split-title, .section-title {
    font-size: 30px;
}

.split-text {
    margin: 16px 0;
    color: var(--gray-600);
}

.split-visual {
    width: 420px;
    height: 240px;
}

.page[data-viewport="narrow"] .hero-content,
.page[data-viewport="narrow"] .hero-visual,
.page[data-viewport="narrow"] .split-visual {
    width: 100%;
    max-width: 100%;
}

/* Grids */
.block {
    padding: 32px var(--pad-x);
}

.section-title {
    margin-bottom: 24px;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(var(--columns, 1), minmax(0, 1fr));
    gap: 24px;
}

.section-actions {
    margin-top: 24px;
}

.product-card {
    padding: 16px;
    border: 1px solid var(--gray-200);
    border-radius: var(--radius);
}

.product-visual {
    height: 160px;
    margin-bottom: 16px;
}

.product-title, .post-title {
    margin: 0;
    font-weight: 600;
}

.product-price {
    margin: 8px 0 0;
    color: var(--gray-600);
}

.price-old {
    text-decoration: line-through;
    color: var(--gray-400);
}

.price-discount {
    color: var(--red-500);
}

.post-card {
    overflow: hidden;
    border: 1px solid var(--gray-200);
    border-radius: var(--radius);
}

.post-visual {
    height: 150px;
}

.post-body {
    padding: 16px;
}

.post-date {
    margin: 0 0 8px;
    font-size: 14px;
    color: var(--gray-500);
}

/* Footer */
.footer {
    margin-top: 48px;
    padding: 32px var(--pad-x);
    border-top: 1px solid var(--gray-200);
}

.footer-top {
    display: flex;
    align-items: center;
    gap: 24px;
}

.page[data-viewport="narrow"] .footer-top {
    flex-direction: column;
}

.footer-brand {
    font-size: 16px;
}

.footer-links {
    display: flex;
    gap: 16px;
}

.footer-links[hidden] {
    display: none;
}

.spacer {
    flex: 1;
}

.newsletter {
    width: 100%;
    max-width: 420px;
}

.newsletter-teaser {
    margin: 0 0 8px;
}

.input-group {
    position: relative;
}

.email-input {
    width: 100%;
    height: 40px;
    padding: 0 112px 0 16px;
    border: 1px solid var(--gray-200);
    border-radius: var(--radius);
    font: inherit;
}

.input-addon {
    position: absolute;
    top: 0;
    right: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 104px;
    height: 40px;
}

.divider {
    margin: 24px 0;
    border: 0;
    border-top: 1px solid var(--gray-200);
}

.footer-bottom {
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-size: 14px;
    color: var(--gray-600);
}

.footer-bottom p {
    margin: 0;
}

@media (max-width: 767px) {
    .footer-links {
        display: none;
    }
}
"#;
