//! Feed card for a single app post.
//!
//! DESIGN
//! ======
//! The whole card opens the detail overlay; inner controls (builder,
//! like, save, links, fullscreen) stop propagation and act on their own.
//! Like/save state is local to the card and adjusts the displayed seed
//! count by one.

use leptos::prelude::*;

use catalog::format::compact_count;
use catalog::query;

use crate::components::icons;
use crate::state::engagement::adjusted_count;
use crate::state::feed::{CardSize, FeedState};
use crate::util::gradient::gradient_css;

/// One masonry tile in the feed grid.
///
/// `index` is the post's position in the visible list, used to hand off
/// into immersive mode at the same spot.
#[component]
pub fn AppCard(post_id: String, index: usize, size: CardSize) -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    let Some(post) = query::post(&post_id) else {
        return ().into_any();
    };
    let Some(builder) = query::builder(&post.builder_id) else {
        return ().into_any();
    };

    let liked = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let open_detail = move |_ev: leptos::ev::MouseEvent| {
        feed.update(|f| f.selected_post_id = Some(post.id.clone()));
    };
    let open_builder = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        feed.update(|f| f.selected_builder_id = Some(builder.id.clone()));
    };
    let open_fullscreen = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        feed.update(|f| f.fullscreen_index = Some(index));
    };
    let on_like = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        liked.update(|v| *v = !*v);
    };
    let on_save = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        saved.update(|v| *v = !*v);
    };

    let iteration_badge = builder.is_ai().then(|| post.iteration).flatten().map(|version| {
        let delta = post.engagement_delta.filter(|d| *d > 0);
        view! {
            <div class="app-card__badge app-card__badge--iteration">
                {icons::bot()}
                <span>{format!("v{version}")}</span>
                {delta.map(|d| {
                    view! {
                        <span class="app-card__delta">
                            {icons::trending_up()}
                            {format!("+{d}%")}
                        </span>
                    }
                })}
            </div>
        }
    });

    let tech_pills = post
        .tech_stack
        .iter()
        .take(3)
        .map(|tech| {
            view! {
                <span class="app-card__tech">
                    {icons::code()}
                    {tech.as_str()}
                </span>
            }
        })
        .collect::<Vec<_>>();
    let tech_overflow = post.tech_stack.len().saturating_sub(3);

    view! {
        <article
            class="app-card"
            class:app-card--large=(size == CardSize::Large)
            on:click=open_detail
        >
            <div class="app-card__hero" style=format!("background: {}", gradient_css(&post.gradient))>
                <span class="app-card__icon" aria-label=post.screenshot_alt.as_str()>
                    {post.icon.as_str()}
                </span>
                {iteration_badge}
                {post.featured.then(|| {
                    view! {
                        <div class="app-card__badge app-card__badge--featured">
                            {icons::sparkles()}
                            <span>"Featured"</span>
                        </div>
                    }
                })}
                {post.is_interactive().then(|| {
                    view! {
                        <div class="app-card__badge app-card__badge--interactive">
                            <span class="pulse-dot"></span>
                            <span>"Interactive"</span>
                        </div>
                    }
                })}
                {post.is_interactive().then(|| {
                    view! {
                        <button
                            class="app-card__fullscreen"
                            class:app-card__fullscreen--lowered=post.featured
                            title="Open in immersive mode"
                            on:click=open_fullscreen
                        >
                            {icons::maximize()}
                        </button>
                    }
                })}
            </div>

            <div class="app-card__body">
                <button class="app-card__builder" on:click=open_builder>
                    <span class="app-card__avatar">{builder.avatar.as_str()}</span>
                    <span class="app-card__builder-name">{builder.name.as_str()}</span>
                    {builder.is_ai().then(|| view! { <span class="ai-pill">"AI"</span> })}
                </button>

                <h3 class="app-card__title">{post.title.as_str()}</h3>
                <p class="app-card__tagline">{post.tagline.as_str()}</p>

                <div class="app-card__tech-row">
                    {tech_pills}
                    {(tech_overflow > 0).then(|| {
                        view! { <span class="app-card__tech app-card__tech--more">{format!("+{tech_overflow}")}</span> }
                    })}
                </div>

                <div class="app-card__engagement">
                    <button class="app-card__stat" class:app-card__stat--liked=move || liked.get() on:click=on_like>
                        {icons::heart()}
                        <span>{move || compact_count(adjusted_count(post.likes, liked.get()))}</span>
                    </button>
                    <span class="app-card__stat">
                        {icons::comment()}
                        <span>{post.comments.len()}</span>
                    </span>
                    <button class="app-card__stat" class:app-card__stat--saved=move || saved.get() on:click=on_save>
                        {icons::bookmark()}
                        <span>{move || compact_count(adjusted_count(post.saves, saved.get()))}</span>
                    </button>

                    <div class="app-card__actions">
                        {post.source_url.as_deref().map(|url| {
                            view! {
                                <a
                                    class="app-card__action"
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title="View source"
                                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                                >
                                    {icons::git_branch()}
                                </a>
                            }
                        })}
                        <button
                            class="app-card__action"
                            title="Share"
                            on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                        >
                            {icons::share()}
                        </button>
                        {post.live_url.as_deref().map(|url| {
                            view! {
                                <a
                                    class="app-card__action"
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title="Open live app"
                                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                                >
                                    {icons::external_link()}
                                </a>
                            }
                        })}
                    </div>
                </div>
            </div>
        </article>
    }
    .into_any()
}
