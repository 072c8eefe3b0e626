//! Journal / blog teaser grid

use leptos::prelude::*;

use crate::catalog::JOURNAL_POSTS;
use crate::types::{Post, Viewport};

const WIDE_COLUMNS: usize = 3;

/// Post grid, three columns wide or one column narrow.
#[component]
pub fn Journal(
    /// Layout class of the page
    #[prop(optional)]
    viewport: Viewport,
) -> impl IntoView {
    let columns = viewport.grid_columns(WIDE_COLUMNS);

    view! {
        <section class="block journal">
            <h2 class="section-title">"Journal & Blog"</h2>
            <div class="card-grid" data-columns=columns.to_string() style=format!("--columns: {}", columns)>
                {JOURNAL_POSTS
                    .iter()
                    .map(|post| view! { <PostCard post=*post /> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="section-actions">
                <button type="button" class="btn btn-link">"Read more"</button>
            </div>
        </section>
    }
}

/// One post teaser: visual, date and title
#[component]
pub fn PostCard(
    /// Post to show
    post: Post,
) -> impl IntoView {
    view! {
        <article class="post-card">
            <div class="placeholder post-visual"></div>
            <div class="post-body">
                <p class="post-date">{post.date}</p>
                <p class="post-title">{post.title}</p>
            </div>
        </article>
    }
}
