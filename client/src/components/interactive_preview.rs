//! Live widget host for interactive post previews.
//!
//! DESIGN
//! ======
//! A post's preview tag picks one of six working mini apps; unknown tags
//! fall back to the static icon tile. Widget logic lives in `previews` as
//! plain state machines, so this module only wires signals, timers, and
//! canvases around them. Timers and canvas work are hydrate-only; the
//! server renders each widget's initial face. Widget controls swallow
//! their clicks; only dead space bubbles up to the host card.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use catalog::query;
use previews::WidgetKind;
use previews::breathing::BreathCycle;
#[cfg(feature = "hydrate")]
use previews::consts::{BREATH_TICK_MS, COST_TICK_MS, RAMEN_TICK_MS};
use previews::consts::{GRID_CANVAS_PX, WALLPAPER_HEIGHT, WALLPAPER_WIDTH};
use previews::grid::{TerritoryGrid, WAR_COLORS};
use previews::meeting::MeetingMeter;
use previews::mood::mood_color;
use previews::ramen::{FIRMNESS_LEVELS, RamenPhase, RamenTimer, clock};
#[cfg(feature = "hydrate")]
use previews::wallpaper::WallpaperSpec;

/// Renders the live widget for a post, or its icon tile when the post
/// has no working widget.
#[component]
pub fn InteractivePreview(post_id: String) -> impl IntoView {
    let Some(post) = query::post(&post_id) else {
        return ().into_any();
    };
    let widget = post.preview_component.as_deref().and_then(WidgetKind::from_tag);

    match widget {
        Some(WidgetKind::MoodRing) => view! { <MoodRingWidget /> }.into_any(),
        Some(WidgetKind::Breathe) => view! { <BreatheWidget /> }.into_any(),
        Some(WidgetKind::MeetingCost) => view! { <MeetingCostWidget /> }.into_any(),
        Some(WidgetKind::ColorWars) => view! { <ColorWarsWidget /> }.into_any(),
        Some(WidgetKind::WallpaperMachine) => view! { <WallpaperWidget /> }.into_any(),
        Some(WidgetKind::RamenTimer) => view! { <RamenTimerWidget /> }.into_any(),
        None => view! {
            <div class="preview preview--static">
                <span class="preview__icon">{post.icon.as_str()}</span>
            </div>
        }
        .into_any(),
    }
}

/// Runs `tick` every `interval_ms` until the owning component unmounts.
#[cfg(feature = "hydrate")]
fn spawn_tick_loop(interval_ms: u32, tick: impl Fn() + 'static) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    interval_ms,
                )))
                .await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}

/// Text input that recolors its background by mood keywords.
#[component]
fn MoodRingWidget() -> impl IntoView {
    let text = RwSignal::new(String::new());

    view! {
        <div class="preview preview--mood" style=move || format!("background: {}", mood_color(&text.get()))>
            <input
                class="preview__mood-input"
                placeholder="Type how you feel..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            />
            <Show when=move || !text.get().is_empty()>
                <p class="preview__hint">"The background changes based on your mood"</p>
            </Show>
        </div>
    }
}

/// Inhale/hold/exhale circle on a one-second tick.
#[component]
fn BreatheWidget() -> impl IntoView {
    let cycle = RwSignal::new(BreathCycle::new());

    #[cfg(feature = "hydrate")]
    spawn_tick_loop(BREATH_TICK_MS, move || cycle.update(BreathCycle::tick));

    view! {
        <div class="preview preview--breathe">
            <div
                class="preview__breath-circle"
                class:preview__breath-circle--expanded=move || cycle.get().phase().is_expanded()
            >
                {move || cycle.get().phase().label()}
            </div>
        </div>
    }
}

/// Running cost counter for a meeting of eight.
#[component]
fn MeetingCostWidget() -> impl IntoView {
    let meter = RwSignal::new(MeetingMeter::new());

    #[cfg(feature = "hydrate")]
    spawn_tick_loop(COST_TICK_MS, move || meter.update(MeetingMeter::tick));

    view! {
        <div class="preview preview--meeting">
            <p class="preview__label">"This meeting costs"</p>
            <p class="preview__cost">{move || meter.get().display()}</p>
            <p class="preview__hint">"8 attendees · avg $150k/yr"</p>
            <button
                class="preview__button"
                on:click=move |ev| {
                    ev.stop_propagation();
                    meter.update(MeetingMeter::toggle);
                }
            >
                {move || if meter.get().is_running() { "Pause" } else { "Resume" }}
            </button>
        </div>
    }
}

/// Click-to-claim territory grid with a color palette.
#[component]
fn ColorWarsWidget() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let grid: RwSignal<Option<TerritoryGrid>> = RwSignal::new(None);
    let selected: RwSignal<u8> = RwSignal::new(0);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if grid.with(Option::is_some) {
                return;
            }
            grid.set(Some(TerritoryGrid::random(js_sys::Math::random)));
        });
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            grid.with(|state| {
                let Some(state) = state.as_ref() else {
                    return;
                };
                draw_grid_canvas(&canvas, state);
            });
        });
    }

    let on_canvas_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        #[cfg(feature = "hydrate")]
        {
            let extent = f64::from(GRID_CANVAS_PX);
            let col = previews::grid::cell_at(f64::from(ev.offset_x()), extent);
            let row = previews::grid::cell_at(f64::from(ev.offset_y()), extent);
            let color = selected.get_untracked();
            grid.update(|state| {
                if let Some(state) = state.as_mut() {
                    state.claim(col, row, color);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = grid;
    };

    let swatches = WAR_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let idx = u8::try_from(i).unwrap_or(0);
            view! {
                <button
                    class="preview__swatch"
                    class:preview__swatch--selected=move || selected.get() == idx
                    style=format!("background: {color}")
                    title=format!("Claim territory in {color}")
                    on:click=move |ev| {
                        ev.stop_propagation();
                        selected.set(idx);
                    }
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="preview preview--colorwars">
            <canvas
                class="preview__grid-canvas"
                node_ref=canvas_ref
                width=GRID_CANVAS_PX.to_string()
                height=GRID_CANVAS_PX.to_string()
                on:click=on_canvas_click
            ></canvas>
            <div class="preview__swatch-row">{swatches}</div>
        </div>
    }
}

/// Procedural wallpaper driven by a seed word.
#[component]
fn WallpaperWidget() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let word = RwSignal::new("ocean".to_owned());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let spec = WallpaperSpec::from_word(&word.get());
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            draw_wallpaper_canvas(&canvas, &spec);
        });
    }

    view! {
        <div class="preview preview--wallpaper">
            <canvas
                class="preview__wallpaper-canvas"
                node_ref=canvas_ref
                width=WALLPAPER_WIDTH.to_string()
                height=WALLPAPER_HEIGHT.to_string()
            ></canvas>
            <input
                class="preview__word-input"
                placeholder="Type a word..."
                prop:value=move || word.get()
                on:input=move |ev| word.set(event_target_value(&ev))
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            />
        </div>
    }
}

/// Firmness selector, countdown, and slurp message.
#[component]
fn RamenTimerWidget() -> impl IntoView {
    let timer = RwSignal::new(RamenTimer::new());

    #[cfg(feature = "hydrate")]
    spawn_tick_loop(RAMEN_TICK_MS, move || timer.update(RamenTimer::tick));

    view! {
        <div class="preview preview--ramen">
            {move || {
                let state = timer.get();
                match state.phase() {
                    RamenPhase::Picking => {
                        let chips = FIRMNESS_LEVELS
                            .iter()
                            .enumerate()
                            .map(|(i, level)| {
                                view! {
                                    <button
                                        class="preview__firmness"
                                        class:preview__firmness--selected=state.selected() == i
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            timer.update(|t| t.select(i));
                                        }
                                    >
                                        {format!("{} {}", level.emoji, level.label)}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <p class="preview__label">"Noodle firmness"</p>
                            <div class="preview__firmness-row">{chips}</div>
                            <button
                                class="preview__button preview__button--start"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    timer.update(RamenTimer::start);
                                }
                            >
                                {format!("Start {} min timer", state.level().minutes())}
                            </button>
                        }
                        .into_any()
                    }
                    RamenPhase::Counting => view! {
                        <span class="preview__ramen-face">"🍜"</span>
                        <p class="preview__clock">{clock(state.remaining())}</p>
                        <p class="preview__hint">{format!("{} noodles", state.level().label)}</p>
                    }
                    .into_any(),
                    RamenPhase::Done => view! {
                        <p class="preview__done">"Done! Slurp! 🍜"</p>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn draw_grid_canvas(canvas: &web_sys::HtmlCanvasElement, grid: &TerritoryGrid) {
    canvas.set_width(GRID_CANVAS_PX);
    canvas.set_height(GRID_CANVAS_PX);
    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };
    let size = f64::from(GRID_CANVAS_PX);
    previews::render::draw_grid(&ctx, grid, size, size);
}

#[cfg(feature = "hydrate")]
fn draw_wallpaper_canvas(canvas: &web_sys::HtmlCanvasElement, spec: &WallpaperSpec) {
    canvas.set_width(WALLPAPER_WIDTH);
    canvas.set_height(WALLPAPER_HEIGHT);
    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };
    let _ = previews::render::draw_wallpaper(&ctx, spec, WALLPAPER_WIDTH, WALLPAPER_HEIGHT);
}
