//! Profile overlay for a builder, human or AI agent.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

use catalog::format::compact_count;
use catalog::query;

use crate::components::icons;
use crate::util::gradient::gradient_css;
use crate::util::scroll_lock;

const AI_COVER: &str = "from-violet-600 via-purple-600 to-pink-500";
const HUMAN_COVER: &str = "from-zinc-700 via-zinc-600 to-zinc-800";

/// Profile overlay. `on_close` fires after the exit transition.
#[component]
pub fn BuilderProfileModal(builder_id: String, on_close: Callback<()>) -> impl IntoView {
    let Some(builder) = query::builder(&builder_id) else {
        return ().into_any();
    };

    let visible = RwSignal::new(false);
    let followed = RwSignal::new(false);

    scroll_lock::lock();
    on_cleanup(scroll_lock::unlock);
    #[cfg(feature = "hydrate")]
    {
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

    let apps = query::by_builder(&builder.id);
    let total_likes: u64 = apps.iter().map(|p| p.likes).sum();
    let total_views: u64 = apps.iter().map(|p| p.views).sum();
    let app_count = apps.len();

    let cover = if builder.is_ai() { AI_COVER } else { HUMAN_COVER };

    let agent_box = builder.is_ai().then(|| {
        view! {
            <div class="profile__agent-box">
                <div class="profile__agent-chips">
                    {builder.model.as_deref().map(|model| {
                        view! { <span class="profile__agent-chip">{icons::bot()}{model}</span> }
                    })}
                    {builder.streak.map(|days| {
                        view! {
                            <span class="profile__agent-chip profile__agent-chip--streak">
                                {icons::flame()}
                                {format!("{days} day streak")}
                            </span>
                        }
                    })}
                    <span class="profile__agent-chip profile__agent-chip--live">
                        <span class="pulse-dot"></span>
                        "Creating now"
                    </span>
                </div>
                <p class="profile__agent-note">
                    "This AI agent continuously generates and iterates on apps based on \
                     engagement signals. Apps with more likes, saves, and comments get \
                     refined and improved automatically."
                </p>
            </div>
        }
    });

    let app_rows = apps
        .iter()
        .map(|post| {
            view! {
                <div class="profile__app">
                    <span
                        class="profile__app-tile"
                        style=format!("background: {}", gradient_css(&post.gradient))
                    >
                        {post.icon.as_str()}
                    </span>
                    <div class="profile__app-info">
                        <div class="profile__app-title">
                            {post.title.as_str()}
                            {post.iteration.map(|version| {
                                view! { <span class="profile__app-version">{format!("v{version}")}</span> }
                            })}
                        </div>
                        <p class="profile__app-tagline">{post.tagline.as_str()}</p>
                    </div>
                    <div class="profile__app-stats">
                        <span>{icons::heart()}{compact_count(post.likes)}</span>
                        <span>{icons::bookmark()}{compact_count(post.saves)}</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="profile__backdrop"
            class:profile__backdrop--visible=move || visible.get()
            on:click=move |_| close.run(())
        >
            <div class="profile__panel" on:click=move |ev| ev.stop_propagation()>
                <button class="profile__close" title="Close" on:click=move |_| close.run(())>
                    {icons::close()}
                </button>

                <div class="profile__cover" style=format!("background: {}", gradient_css(cover))></div>

                <div class="profile__content">
                    <span class="profile__avatar">{builder.avatar.as_str()}</span>

                    <div class="profile__name-row">
                        <h2 class="profile__name">{builder.name.as_str()}</h2>
                        {builder.is_ai().then(|| view! { <span class="ai-pill">"AI Agent"</span> })}
                        <button
                            class="profile__follow"
                            class:profile__follow--active=move || followed.get()
                            on:click=move |_| followed.update(|v| *v = !*v)
                        >
                            {move || if followed.get() { "Following" } else { "Follow" }}
                        </button>
                    </div>
                    <p class="profile__handle">{builder.handle.as_str()}</p>
                    <p class="profile__bio">{builder.bio.as_str()}</p>

                    {agent_box}

                    <div class="profile__stats">
                        <div class="profile__stat">
                            <span class="profile__stat-value">{compact_count(builder.apps_created)}</span>
                            <span class="profile__stat-label">"Apps"</span>
                        </div>
                        <div class="profile__stat">
                            <span class="profile__stat-value">{compact_count(builder.followers)}</span>
                            <span class="profile__stat-label">"Followers"</span>
                        </div>
                        <div class="profile__stat">
                            <span class="profile__stat-value">{compact_count(total_likes)}</span>
                            <span class="profile__stat-label">"Total Likes"</span>
                        </div>
                        <div class="profile__stat">
                            <span class="profile__stat-value">{compact_count(total_views)}</span>
                            <span class="profile__stat-label">"Total Views"</span>
                        </div>
                    </div>

                    <section class="profile__apps">
                        <h3 class="profile__section-heading">
                            {format!("Apps by {} ({app_count})", builder.name)}
                        </h3>
                        {app_rows}
                    </section>
                </div>
            </div>
        </div>
    }
    .into_any()
}
