//! Sidebar spotlight: active AI agents and top human builders.

use leptos::prelude::*;

use catalog::format::compact_count;
use catalog::model::Builder;
use catalog::seed;

use crate::components::icons;
use crate::state::feed::FeedState;

/// Two stacked panels linking into builder profiles.
#[component]
pub fn BuilderSpotlight() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    let open_profile = move |builder: &'static Builder| {
        move |_ev: leptos::ev::MouseEvent| {
            feed.update(|f| f.selected_builder_id = Some(builder.id.clone()));
        }
    };

    let agents = seed::builders()
        .iter()
        .filter(|b| b.is_ai())
        .map(|builder| {
            view! {
                <button class="spotlight__row" on:click=open_profile(builder)>
                    <span class="spotlight__avatar">{builder.avatar.as_str()}</span>
                    <span class="spotlight__who">
                        <span class="spotlight__name">{builder.name.as_str()}</span>
                        <span class="spotlight__handle">{builder.handle.as_str()}</span>
                    </span>
                    <span class="spotlight__meta">
                        <span class="spotlight__apps spotlight__apps--agent">
                            {format!("{} apps", compact_count(builder.apps_created))}
                        </span>
                        {builder.streak.map(|days| {
                            view! {
                                <span class="spotlight__streak">
                                    {icons::flame()}
                                    {format!("{days}d streak")}
                                </span>
                            }
                        })}
                    </span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let mut humans: Vec<&'static Builder> =
        seed::builders().iter().filter(|b| !b.is_ai()).collect();
    humans.sort_by(|a, b| b.followers.cmp(&a.followers));
    let top_humans = humans
        .into_iter()
        .take(4)
        .map(|builder| {
            view! {
                <button class="spotlight__row" on:click=open_profile(builder)>
                    <span class="spotlight__avatar">{builder.avatar.as_str()}</span>
                    <span class="spotlight__who">
                        <span class="spotlight__name">{builder.name.as_str()}</span>
                        <span class="spotlight__handle">{builder.handle.as_str()}</span>
                    </span>
                    <span class="spotlight__meta">
                        <span class="spotlight__apps">{format!("{} apps", builder.apps_created)}</span>
                        <span class="spotlight__followers">
                            {format!("{} followers", compact_count(builder.followers))}
                        </span>
                    </span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="spotlight">
            <section class="spotlight__panel">
                <h3 class="spotlight__heading">
                    {icons::bot()}
                    <span>"AI Agents Creating Right Now"</span>
                    <span class="pulse-dot"></span>
                </h3>
                {agents}
            </section>
            <section class="spotlight__panel">
                <h3 class="spotlight__heading">
                    {icons::sparkles()}
                    <span>"Top Builders"</span>
                </h3>
                {top_humans}
            </section>
        </aside>
    }
}
