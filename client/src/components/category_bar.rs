//! Horizontal filter strip under the feed header.
//!
//! DESIGN
//! ======
//! Special filters (discover, trending, featured, AI-made) come first,
//! then a divider, then one chip per catalog category. Exactly one chip
//! is active at a time; chips only write `FeedState.filter`.

use leptos::prelude::*;

use catalog::model::CATEGORIES;

use crate::components::icons;
use crate::state::feed::{FeedFilter, FeedState};

const SPECIAL_FILTERS: &[(FeedFilter, &str)] = &[
    (FeedFilter::All, "Discover"),
    (FeedFilter::Trending, "Trending"),
    (FeedFilter::Featured, "Featured"),
    (FeedFilter::AiCreated, "AI-Made"),
];

/// Scrollable row of filter chips.
#[component]
pub fn CategoryBar() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    let special_chips = SPECIAL_FILTERS
        .iter()
        .map(|&(filter, label)| {
            let is_active = move || feed.get().filter == filter;
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                feed.update(|f| f.filter = filter);
            };
            view! {
                <button
                    class="category-bar__chip category-bar__chip--special"
                    class:category-bar__chip--active=is_active
                    on:click=on_click
                >
                    {special_icon(filter)}
                    <span>{label}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let category_chips = CATEGORIES
        .iter()
        .map(|meta| {
            let filter = FeedFilter::Category(meta.id);
            let is_active = move || feed.get().filter == filter;
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                feed.update(|f| f.filter = filter);
            };
            view! {
                <button
                    class="category-bar__chip"
                    class:category-bar__chip--active=is_active
                    on:click=on_click
                >
                    <span class="category-bar__emoji">{meta.icon}</span>
                    <span>{meta.label}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="category-bar">
            <div class="category-bar__scroll">
                {special_chips}
                <div class="category-bar__divider"></div>
                {category_chips}
            </div>
        </div>
    }
}

fn special_icon(filter: FeedFilter) -> impl IntoView {
    match filter {
        FeedFilter::Trending => icons::flame().into_any(),
        FeedFilter::Featured => icons::sparkles().into_any(),
        FeedFilter::AiCreated => icons::bot().into_any(),
        FeedFilter::All | FeedFilter::Category(_) => icons::compass().into_any(),
    }
}
