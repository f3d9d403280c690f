//! Full detail overlay for a single app post.
//!
//! DESIGN
//! ======
//! The overlay mounts invisible, flips visible on the next tick so the
//! enter transition plays, and delays `on_close` by the exit transition
//! length. Interactive posts run their live widget in the hero; everyone
//! else gets the icon tile. Engagement toggles stay local to the overlay.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

use catalog::format::compact_count;
use catalog::query;

use crate::components::icons;
use crate::components::interactive_preview::InteractivePreview;
use crate::state::engagement::adjusted_count;
use crate::util::gradient::gradient_css;
use crate::util::scroll_lock;

/// Detail overlay. `on_close` fires after the exit transition.
#[component]
pub fn AppDetailModal(post_id: String, on_close: Callback<()>) -> impl IntoView {
    let Some(post) = query::post(&post_id) else {
        return ().into_any();
    };
    let Some(builder) = query::builder(&post.builder_id) else {
        return ().into_any();
    };

    let visible = RwSignal::new(false);
    let liked = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let followed = RwSignal::new(false);
    let comment_text = RwSignal::new(String::new());

    scroll_lock::lock();
    on_cleanup(scroll_lock::unlock);
    #[cfg(feature = "hydrate")]
    {
        // Flip after mount so the enter transition has a frame to start from.
        Timeout::new(0, move || visible.set(true)).forget();
    }

    let close = Callback::new(move |()| {
        visible.set(false);
        #[cfg(feature = "hydrate")]
        {
            Timeout::new(200, move || on_close.run(())).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            on_close.run(());
        }
    });

    let hero = if post.is_interactive() {
        view! { <InteractivePreview post_id=post.id.clone() /> }.into_any()
    } else {
        view! { <span class="detail__hero-icon">{post.icon.as_str()}</span> }.into_any()
    };

    let badges = view! {
        <div class="detail__badges">
            {builder.is_ai().then(|| post.iteration).flatten().map(|version| {
                view! {
                    <span class="detail__badge detail__badge--iteration">
                        {icons::bot()}
                        {format!("v{version}")}
                    </span>
                }
            })}
            {post.featured.then(|| {
                view! {
                    <span class="detail__badge detail__badge--featured">
                        {icons::sparkles()}
                        "Featured"
                    </span>
                }
            })}
        </div>
    };

    let tech_pills = post
        .tech_stack
        .iter()
        .map(|tech| view! { <span class="detail__tech">{tech.as_str()}</span> })
        .collect::<Vec<_>>();

    let iteration_history = builder
        .is_ai()
        .then(|| post.iteration)
        .flatten()
        .filter(|n| *n > 1)
        .map(|iteration| {
            let shown = iteration.min(8);
            let bars = (0..shown)
                .map(|i| {
                    view! {
                        <div
                            class="detail__iter-bar"
                            class:detail__iter-bar--current=(i + 1 == iteration)
                        ></div>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <section class="detail__iterations">
                    <h3 class="detail__section-heading">
                        {icons::bot()}
                        "AI Iteration History"
                    </h3>
                    <p class="detail__iterations-note">
                        {format!(
                            "This app has been iterated {iteration} times based on user engagement and feedback."
                        )}
                    </p>
                    <div class="detail__iter-bars">
                        {bars}
                        {(iteration > 8).then(|| {
                            view! { <span class="detail__iter-more">{format!("+{}", iteration - 8)}</span> }
                        })}
                    </div>
                    {post.engagement_delta.map(|delta| {
                        view! {
                            <p class="detail__iter-delta">
                                {icons::trending_up()}
                                {format!("{delta}% more engagement than previous version")}
                            </p>
                        }
                    })}
                </section>
            }
        });

    let comment_rows = post
        .comments
        .iter()
        .filter_map(|comment| {
            let author = query::builder(&comment.builder_id)?;
            Some(view! {
                <div class="detail__comment">
                    <span class="detail__comment-avatar">{author.avatar.as_str()}</span>
                    <div class="detail__comment-body">
                        <div class="detail__comment-meta">
                            <span class="detail__comment-name">{author.name.as_str()}</span>
                            {author.is_ai().then(icons::bot)}
                            <span class="detail__comment-time">{comment.timestamp.as_str()}</span>
                        </div>
                        <p class="detail__comment-text">{comment.text.as_str()}</p>
                        <span class="detail__comment-likes">
                            {icons::heart()}
                            {comment.likes}
                        </span>
                    </div>
                </div>
            })
        })
        .collect::<Vec<_>>();

    let on_send = move |_ev: leptos::ev::MouseEvent| {
        comment_text.set(String::new());
    };

    view! {
        <div
            class="detail__backdrop"
            class:detail__backdrop--visible=move || visible.get()
            on:click=move |_| close.run(())
        >
            <div class="detail__panel" on:click=move |ev| ev.stop_propagation()>
                <button class="detail__close" title="Close" on:click=move |_| close.run(())>
                    {icons::close()}
                </button>

                <div
                    class="detail__hero"
                    class:detail__hero--tall=post.is_interactive()
                    style=format!("background: {}", gradient_css(&post.gradient))
                >
                    {hero}
                    {badges}
                </div>

                <div class="detail__content">
                    <div class="detail__title-row">
                        <h2 class="detail__title">{post.title.as_str()}</h2>
                        {post.is_interactive().then(|| {
                            view! {
                                <span class="detail__live-pill">
                                    <span class="pulse-dot"></span>
                                    "Try it live"
                                </span>
                            }
                        })}
                    </div>
                    <p class="detail__tagline">{post.tagline.as_str()}</p>

                    <div class="detail__builder">
                        <span class="detail__builder-avatar">{builder.avatar.as_str()}</span>
                        <div class="detail__builder-info">
                            <div class="detail__builder-name">
                                {builder.name.as_str()}
                                {builder.is_ai().then(|| {
                                    let model = builder
                                        .model
                                        .as_deref()
                                        .map(|m| format!(" · {m}"))
                                        .unwrap_or_default();
                                    view! { <span class="ai-pill">{format!("AI Agent{model}")}</span> }
                                })}
                            </div>
                            <div class="detail__builder-sub">
                                {format!(
                                    "{} · {} followers · {} apps",
                                    builder.handle,
                                    compact_count(builder.followers),
                                    builder.apps_created
                                )}
                            </div>
                        </div>
                        <button
                            class="detail__follow"
                            class:detail__follow--active=move || followed.get()
                            on:click=move |_| followed.update(|v| *v = !*v)
                        >
                            {move || if followed.get() { "Following" } else { "Follow" }}
                        </button>
                    </div>

                    <p class="detail__description">{post.description.as_str()}</p>

                    <div class="detail__tech-row">{tech_pills}</div>

                    <div class="detail__stats">
                        <button
                            class="detail__stat"
                            class:detail__stat--liked=move || liked.get()
                            on:click=move |_| liked.update(|v| *v = !*v)
                        >
                            {icons::heart()}
                            <span>{move || compact_count(adjusted_count(post.likes, liked.get()))}</span>
                        </button>
                        <span class="detail__stat">
                            {icons::comment()}
                            <span>{post.comments.len()}</span>
                        </span>
                        <button
                            class="detail__stat"
                            class:detail__stat--saved=move || saved.get()
                            on:click=move |_| saved.update(|v| *v = !*v)
                        >
                            {icons::bookmark()}
                            <span>{move || compact_count(adjusted_count(post.saves, saved.get()))}</span>
                        </button>
                        <span class="detail__stat">
                            {icons::eye()}
                            <span>{compact_count(post.views)}</span>
                        </span>
                        <div class="detail__stat-spacer"></div>
                        {post.source_url.as_deref().map(|url| {
                            view! {
                                <a
                                    class="detail__stat detail__stat--link"
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {icons::git_branch()}
                                    <span>"Source"</span>
                                </a>
                            }
                        })}
                        <button class="detail__stat">
                            {icons::share()}
                            <span>"Share"</span>
                        </button>
                    </div>

                    {iteration_history}

                    <section class="detail__comments">
                        <h3 class="detail__section-heading">
                            {format!("Comments ({})", post.comments.len())}
                        </h3>
                        <div class="detail__comment-input">
                            <span class="detail__comment-avatar">"👤"</span>
                            <input
                                placeholder="Share your thoughts..."
                                prop:value=move || comment_text.get()
                                on:input=move |ev| comment_text.set(event_target_value(&ev))
                            />
                            <button class="detail__send" title="Send" on:click=on_send>
                                {icons::send()}
                            </button>
                        </div>
                        {comment_rows}
                    </section>
                </div>
            </div>
        </div>
    }
    .into_any()
}
