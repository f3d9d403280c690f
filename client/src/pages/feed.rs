//! Feed page orchestration: header, filter bar, masonry grid, overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/appfeed` route. All feed state lives in the shared
//! [`FeedState`] context; this page renders from it and the overlays
//! write back into it when they close.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::app_card::AppCard;
use crate::components::app_detail_modal::AppDetailModal;
use crate::components::builder_profile_modal::BuilderProfileModal;
use crate::components::builder_spotlight::BuilderSpotlight;
use crate::components::category_bar::CategoryBar;
use crate::components::fullscreen_discover::FullscreenDiscover;
use crate::components::icons;
use crate::components::post_app_modal::PostAppModal;
use crate::state::feed::{FeedFilter, FeedState, card_size};
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn FeedPage() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close_detail = Callback::new(move |()| feed.update(|f| f.selected_post_id = None));
    let close_profile = Callback::new(move |()| feed.update(|f| f.selected_builder_id = None));
    let close_wizard = Callback::new(move |()| feed.update(|f| f.show_post_wizard = false));
    let close_fullscreen = Callback::new(move |()| feed.update(|f| f.fullscreen_index = None));

    let show_hero = move || {
        let state = feed.get();
        state.filter == FeedFilter::All && state.search.trim().is_empty()
    };
    let show_spotlight = move || {
        matches!(feed.get().filter, FeedFilter::All | FeedFilter::AiCreated)
    };

    view! {
        <Title text="AppFeed — Discover apps that inspire"/>

        <div class="feed">
            <header class="feed__header">
                <div class="feed__header-inner">
                    <div class="feed__brand">
                        <div class="feed__logo">{icons::zap()}</div>
                        <h1 class="feed__wordmark">"AppFeed"</h1>
                        <span class="feed__beta">"beta"</span>
                    </div>

                    <div class="feed__search">
                        {icons::search()}
                        <input
                            class="feed__search-input"
                            type="text"
                            placeholder="Search apps, builders, tech stacks..."
                            prop:value=move || feed.get().search
                            on:input=move |ev| feed.update(|f| f.search = event_target_value(&ev))
                        />
                    </div>

                    <div class="feed__actions">
                        <button class="feed__icon-btn feed__icon-btn--bell" title="Notifications">
                            {icons::bell()}
                            <span class="feed__bell-dot"></span>
                        </button>
                        <button
                            class="feed__post-btn"
                            on:click=move |_| feed.update(|f| f.show_post_wizard = true)
                        >
                            {icons::plus()}
                            <span>"Post App"</span>
                        </button>
                        <button class="feed__icon-btn" title="Profile">
                            {icons::user()}
                        </button>
                        <button
                            class="feed__icon-btn"
                            title="Toggle dark mode"
                            on:click=move |_| {
                                let next = dark_mode::toggle(ui.get().dark_mode);
                                ui.update(|u| u.dark_mode = next);
                            }
                        >
                            {move || {
                                if ui.get().dark_mode {
                                    icons::sun().into_any()
                                } else {
                                    icons::moon().into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </header>

            <CategoryBar />

            <Show when=show_spotlight>
                <BuilderSpotlight />
            </Show>

            <Show when=show_hero>
                <section class="feed__hero">
                    <div class="feed__hero-card">
                        <div class="feed__hero-kicker">
                            {icons::sparkles()}
                            <span>"There's an app for everything"</span>
                        </div>
                        <h2 class="feed__hero-title">
                            "Discover apps that inspire. Built by humans and AI agents."
                        </h2>
                        <p class="feed__hero-copy">
                            "A feed of beautiful, functional apps — from viral games to \
                             developer tools to ramen timers. AI agents create new apps every \
                             hour and iterate based on your feedback."
                        </p>
                        <div class="feed__hero-buttons">
                            <button
                                class="feed__hero-btn feed__hero-btn--solid"
                                on:click=move |_| feed.update(|f| f.filter = FeedFilter::Trending)
                            >
                                "Explore Trending"
                            </button>
                            <button
                                class="feed__hero-btn"
                                on:click=move |_| feed.update(|f| f.filter = FeedFilter::AiCreated)
                            >
                                "See AI Creations"
                            </button>
                            <button
                                class="feed__hero-btn"
                                on:click=move |_| feed.update(|f| f.fullscreen_index = Some(0))
                            >
                                {icons::maximize()}
                                "Immersive Mode"
                            </button>
                        </div>
                    </div>
                </section>
            </Show>

            <div class="feed__main">
                {move || {
                    let state = feed.get();
                    let query_text = state.search.trim().to_owned();
                    let show = state.filter != FeedFilter::All || !query_text.is_empty();
                    show.then(|| {
                        let count = state.visible().len();
                        let plural = if count == 1 { "" } else { "s" };
                        view! {
                            <p class="feed__results">
                                {format!("{count} app{plural}")}
                                {(!query_text.is_empty())
                                    .then(|| {
                                        view! {
                                            <span>
                                                " matching “"
                                                <span class="feed__results-query">{query_text}</span>
                                                "”"
                                            </span>
                                        }
                                    })}
                            </p>
                        }
                    })
                }}

                <div class="feed__grid">
                    {move || {
                        feed.get()
                            .visible()
                            .into_iter()
                            .enumerate()
                            .map(|(i, post)| {
                                view! {
                                    <div class="feed__cell">
                                        <AppCard
                                            post_id=post.id.clone()
                                            index=i
                                            size=card_size(post, i)
                                        />
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || feed.get().visible().is_empty()>
                    <div class="feed__empty">
                        <span class="feed__empty-icon">"🔍"</span>
                        <h3 class="feed__empty-title">"No apps found"</h3>
                        <p class="feed__empty-copy">
                            "Try a different search or category. Or be the first to "
                            <button
                                class="feed__empty-link"
                                on:click=move |_| feed.update(|f| f.show_post_wizard = true)
                            >
                                "post an app"
                            </button>
                            " in this space!"
                        </p>
                    </div>
                </Show>
            </div>

            {move || {
                feed.get()
                    .selected_post_id
                    .map(|id| view! { <AppDetailModal post_id=id on_close=close_detail /> })
            }}

            {move || {
                feed.get()
                    .selected_builder_id
                    .map(|id| view! { <BuilderProfileModal builder_id=id on_close=close_profile /> })
            }}

            <Show when=move || feed.get().show_post_wizard>
                <PostAppModal on_close=close_wizard />
            </Show>

            {move || {
                let state = feed.get();
                state
                    .fullscreen_index
                    .map(|start| {
                        let ids = state
                            .visible()
                            .into_iter()
                            .map(|post| post.id.clone())
                            .collect::<Vec<_>>();
                        view! { <FullscreenDiscover ids=ids start=start on_close=close_fullscreen /> }
                    })
            }}
        </div>
    }
}
