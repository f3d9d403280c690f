//! Full-screen vertical navigator over the current post list.
//!
//! DESIGN
//! ======
//! One post fills the screen; arrow keys, j/k, the mouse wheel, and touch
//! swipes all move through the same two-phase slide (request, then commit
//! when the 150ms exit animation ends). The id list is frozen at open time
//! so filter state cannot shift posts underneath the viewer.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

use catalog::format::compact_count;
use catalog::query;

use crate::components::icons;
use crate::components::interactive_preview::InteractivePreview;
use crate::state::discover::{DiscoverNav, SlideDirection};
use crate::state::engagement::{EngagementState, adjusted_count};
use crate::util::gradient::gradient_css;
use crate::util::scroll_lock;

/// Matches the CSS slide transition length.
#[cfg(feature = "hydrate")]
const SLIDE_MS: u32 = 150;

/// Starts a slide if the navigator will accept one, scheduling the commit
/// for when the exit animation finishes.
fn begin_slide(nav: RwSignal<DiscoverNav>, direction: SlideDirection) {
    let mut state = nav.get_untracked();
    let accepted = match direction {
        SlideDirection::Up => state.request_next(),
        SlideDirection::Down => state.request_prev(),
    };
    if !accepted {
        return;
    }
    nav.set(state);
    #[cfg(feature = "hydrate")]
    {
        Timeout::new(SLIDE_MS, move || nav.update(|n| n.commit())).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        nav.update(|n| n.commit());
    }
}

/// Immersive overlay. `ids` is the post order captured when it opened.
#[component]
pub fn FullscreenDiscover(ids: Vec<String>, start: usize, on_close: Callback<()>) -> impl IntoView {
    let len = ids.len();
    let nav = RwSignal::new(DiscoverNav::new(start, len));
    let engagement = RwSignal::new(EngagementState::default());
    let _touch_start_y = RwSignal::new(0);

    scroll_lock::lock();
    on_cleanup(scroll_lock::unlock);

    #[cfg(feature = "hydrate")]
    {
        let ids_for_keys = ids.clone();
        if let Some(window) = web_sys::window() {
            let handler = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
                match ev.key().as_str() {
                    "ArrowDown" | "j" => begin_slide(nav, SlideDirection::Up),
                    "ArrowUp" | "k" => begin_slide(nav, SlideDirection::Down),
                    "Escape" => on_close.run(()),
                    "l" => {
                        let index = nav.get_untracked().index;
                        if let Some(id) = ids_for_keys.get(index) {
                            let id = id.clone();
                            engagement.update(|e| e.toggle_like(&id));
                        }
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
            let _ = window.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .remove_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
                }
            });
        }
    }

    let ids_for_view = ids;
    let content = move || {
        let state = nav.get();
        let Some(post) = ids_for_view.get(state.index).and_then(|id| query::post(id)) else {
            return ().into_any();
        };
        let Some(builder) = query::builder(&post.builder_id) else {
            return ().into_any();
        };

        let liked = move || engagement.with(|e| e.is_liked(&post.id));
        let saved = move || engagement.with(|e| e.is_saved(&post.id));

        view! {
            <div
                class="fullscreen__hero"
                style=format!("background: {}", gradient_css(&post.gradient))
            >
                {if post.is_interactive() {
                    view! { <InteractivePreview post_id=post.id.clone() /> }.into_any()
                } else {
                    view! { <span class="fullscreen__icon">{post.icon.as_str()}</span> }.into_any()
                }}

                <div class="fullscreen__badges">
                    {builder
                        .is_ai()
                        .then(|| post.iteration)
                        .flatten()
                        .map(|iteration| {
                            view! {
                                <div class="fullscreen__badge">
                                    {icons::bot()}
                                    <span>{format!("v{iteration}")}</span>
                                    {post
                                        .engagement_delta
                                        .filter(|delta| *delta > 0)
                                        .map(|delta| {
                                            view! {
                                                <span class="fullscreen__badge-delta">
                                                    {icons::trending_up()}
                                                    {format!("+{delta}%")}
                                                </span>
                                            }
                                        })}
                                </div>
                            }
                        })}
                    {post
                        .featured
                        .then(|| {
                            view! {
                                <div class="fullscreen__badge fullscreen__badge--featured">
                                    {icons::sparkles()}
                                    "Featured"
                                </div>
                            }
                        })}
                    {post
                        .is_interactive()
                        .then(|| {
                            view! {
                                <div class="fullscreen__badge">
                                    <span class="pulse-dot"></span>
                                    "Interactive — try it!"
                                </div>
                            }
                        })}
                </div>
            </div>

            <div class="fullscreen__info">
                <div class="fullscreen__info-inner">
                    <div class="fullscreen__info-row">
                        <div class="fullscreen__meta">
                            <div class="fullscreen__builder">
                                <span class="fullscreen__avatar">{builder.avatar.as_str()}</span>
                                <span class="fullscreen__builder-name">{builder.name.as_str()}</span>
                                {builder
                                    .is_ai()
                                    .then(|| {
                                        view! {
                                            <span class="ai-pill">{icons::bot()}"AI"</span>
                                        }
                                    })}
                                <span class="fullscreen__handle">{builder.handle.as_str()}</span>
                            </div>
                            <h2 class="fullscreen__title">{post.title.as_str()}</h2>
                            <p class="fullscreen__tagline">{post.tagline.as_str()}</p>
                        </div>

                        <div class="fullscreen__actions">
                            <button
                                class="fullscreen__action"
                                class:fullscreen__action--liked=liked
                                on:click=move |_| engagement.update(|e| e.toggle_like(&post.id))
                            >
                                {icons::heart()}
                                <span>{move || compact_count(adjusted_count(post.likes, liked()))}</span>
                            </button>
                            <button class="fullscreen__action">
                                {icons::comment()}
                                <span>{post.comments.len()}</span>
                            </button>
                            <button
                                class="fullscreen__action"
                                class:fullscreen__action--saved=saved
                                on:click=move |_| engagement.update(|e| e.toggle_save(&post.id))
                            >
                                {icons::bookmark()}
                                <span>{move || compact_count(adjusted_count(post.saves, saved()))}</span>
                            </button>
                            <button class="fullscreen__action">
                                {icons::share()}
                                <span>{compact_count(post.shares)}</span>
                            </button>
                        </div>
                    </div>

                    <div class="fullscreen__hints">
                        <span><kbd>"↑"</kbd>" "<kbd>"↓"</kbd>" navigate"</span>
                        <span><kbd>"L"</kbd>" like"</span>
                        <span><kbd>"Esc"</kbd>" close"</span>
                        <span>"Swipe to navigate on mobile"</span>
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div
            class="fullscreen"
            on:wheel=move |ev: leptos::ev::WheelEvent| {
                #[cfg(feature = "hydrate")]
                {
                    if ev.delta_y().abs() > 30.0 {
                        if ev.delta_y() > 0.0 {
                            begin_slide(nav, SlideDirection::Up);
                        } else {
                            begin_slide(nav, SlideDirection::Down);
                        }
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = ev;
                }
            }
            on:touchstart=move |ev: leptos::ev::TouchEvent| {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(touch) = ev.touches().item(0) {
                        _touch_start_y.set(touch.client_y());
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = ev;
                }
            }
            on:touchend=move |ev: leptos::ev::TouchEvent| {
                #[cfg(feature = "hydrate")]
                {
                    let Some(touch) = ev.changed_touches().item(0) else {
                        return;
                    };
                    let diff = _touch_start_y.get_untracked() - touch.client_y();
                    if diff > 50 {
                        begin_slide(nav, SlideDirection::Up);
                    } else if diff < -50 {
                        begin_slide(nav, SlideDirection::Down);
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = ev;
                }
            }
        >
            <button class="fullscreen__close" title="Close" on:click=move |_| on_close.run(())>
                {icons::close()}
            </button>

            <div class="fullscreen__progress">
                {move || format!("{} / {}", nav.get().index + 1, len)}
            </div>

            <div class="fullscreen__arrows">
                <button
                    class="fullscreen__arrow"
                    disabled=move || !nav.get().can_prev()
                    on:click=move |_| begin_slide(nav, SlideDirection::Down)
                >
                    {icons::chevron_up()}
                </button>
                <button
                    class="fullscreen__arrow"
                    disabled=move || !nav.get().can_next()
                    on:click=move |_| begin_slide(nav, SlideDirection::Up)
                >
                    {icons::chevron_down()}
                </button>
            </div>

            <div
                class="fullscreen__content"
                class:fullscreen__content--slide-up=move || {
                    nav.get().pending == Some(SlideDirection::Up)
                }
                class:fullscreen__content--slide-down=move || {
                    nav.get().pending == Some(SlideDirection::Down)
                }
            >
                {content}
            </div>
        </div>
    }
}
