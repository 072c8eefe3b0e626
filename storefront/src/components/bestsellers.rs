//! Bestseller product grid

use leptos::prelude::*;

use crate::catalog::BESTSELLERS;
use crate::types::{PriceDisplay, Product, Viewport};

/// Columns of the grid on wide viewports.
const WIDE_COLUMNS: usize = 4;

/// Product grid, four columns wide or one column narrow.
#[component]
pub fn Bestsellers(
    /// Layout class of the page
    #[prop(optional)]
    viewport: Viewport,
) -> impl IntoView {
    let columns = viewport.grid_columns(WIDE_COLUMNS);

    view! {
        <section class="block bestsellers">
            <h2 class="section-title">"Our Bestsellers"</h2>
            <div class="card-grid" data-columns=columns.to_string() style=format!("--columns: {}", columns)>
                {BESTSELLERS
                    .iter()
                    .map(|product| view! { <ProductCard product=*product /> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="section-actions">
                <button type="button" class="btn btn-outline">"Show all"</button>
                <button type="button" class="btn btn-solid">"View"</button>
            </div>
        </section>
    }
}

/// One product card: visual, title and price line
#[component]
pub fn ProductCard(
    /// Product to show
    product: Product,
) -> impl IntoView {
    let price = match product.displayed_price() {
        PriceDisplay::Plain(price) => price.into_any(),
        PriceDisplay::Struck { old, label } => view! {
            <span>
                <span class="price-old">{old}</span>
                " "
                <span class="price-discount">{label}</span>
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="product-card">
            <div class="placeholder product-visual"></div>
            <p class="product-title">{product.title}</p>
            <p class="product-price">{price}</p>
        </div>
    }
}
