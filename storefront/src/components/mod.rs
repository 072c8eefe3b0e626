//! Leptos UI components for the landing page.
//!
//! Every component is a stateless `#[component]` function over literal
//! catalog data. Layout decisions take an explicit [`crate::types::Viewport`]
//! instead of reading the environment.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── ThemeProvider
//!     └── Home
//!         ├── Nav (NavLinks | menu button)
//!         ├── Hero
//!         ├── SplitSection "Ideal Has Never Been Closer"
//!         ├── Bestsellers
//!         │   └── ProductCard x4
//!         ├── SplitSection "Swiss Essence"
//!         ├── Journal
//!         │   └── PostCard x3
//!         └── Footer (NavLinks, newsletter input)
//! ```

mod bestsellers;
mod document;
mod footer;
mod hero;
mod home;
mod journal;
mod nav;
mod split_section;

pub use bestsellers::{Bestsellers, ProductCard};
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use home::Home;
pub use journal::{Journal, PostCard};
pub use nav::{Nav, NavLinks};
pub use split_section::SplitSection;
