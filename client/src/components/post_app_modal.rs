//! Three-step "Post App" wizard.
//!
//! DESIGN
//! ======
//! Connect, customize, preview. Analysis is a canned two-second delay and
//! nothing is ever published; the draft lives in this component, so closing
//! the wizard discards every field. Step screens are split into their own
//! components and share the draft signal.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

use catalog::model::CATEGORIES;

use crate::components::icons;
use crate::state::draft::{
    DraftState, GRADIENT_CHOICES, ICON_CHOICES, WizardStep, canned_analysis,
};
use crate::util::gradient::gradient_css;
use crate::util::scroll_lock;

/// Wizard overlay. `on_close` fires after the exit transition.
#[component]
pub fn PostAppModal(on_close: Callback<()>) -> impl IntoView {
    let visible = RwSignal::new(false);
    let draft = RwSignal::new(DraftState::default());

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

    view! {
        <div
            class="wizard__backdrop"
            class:wizard__backdrop--visible=move || visible.get()
            on:click=move |_| close.run(())
        >
            <div class="wizard__panel" on:click=move |ev| ev.stop_propagation()>
                <div class="wizard__header">
                    <div>
                        <h2 class="wizard__title">"Post an App"</h2>
                        <p class="wizard__subtitle">"Share your creation with the community"</p>
                    </div>
                    <button class="wizard__close" title="Close" on:click=move |_| close.run(())>
                        {icons::close()}
                    </button>
                </div>

                <StepIndicator draft=draft />

                <div class="wizard__body">
                    {move || match draft.get().step {
                        WizardStep::Connect => view! { <StepConnect draft=draft /> }.into_any(),
                        WizardStep::Customize => view! { <StepCustomize draft=draft /> }.into_any(),
                        WizardStep::Preview => view! { <StepPreview draft=draft close=close /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StepIndicator(draft: RwSignal<DraftState>) -> impl IntoView {
    let steps = [WizardStep::Connect, WizardStep::Customize, WizardStep::Preview];
    let markers = steps
        .iter()
        .map(|&s| {
            let is_current = move || draft.get().step == s;
            let is_done = move || draft.get().step.number() > s.number();
            view! {
                <div class="wizard__step">
                    <div
                        class="wizard__step-circle"
                        class:wizard__step-circle--current=is_current
                        class:wizard__step-circle--done=is_done
                    >
                        {move || {
                            if is_done() {
                                icons::check().into_any()
                            } else {
                                view! { <span>{s.number()}</span> }.into_any()
                            }
                        }}
                    </div>
                    <span class="wizard__step-label" class:wizard__step-label--current=is_current>
                        {s.label()}
                    </span>
                    {(s != WizardStep::Preview).then(icons::chevron_right)}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="wizard__steps">{markers}</div> }
}

#[component]
fn StepConnect(draft: RwSignal<DraftState>) -> impl IntoView {
    let on_analyze = move |_ev: leptos::ev::MouseEvent| {
        draft.update(|d| {
            d.analyzing = true;
            d.step = WizardStep::Customize;
        });
        #[cfg(feature = "hydrate")]
        {
            Timeout::new(2_000, move || {
                draft.update(|d| d.apply_analysis(canned_analysis()));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            draft.update(|d| d.apply_analysis(canned_analysis()));
        }
    };

    view! {
        <div class="wizard__section">
            <div>
                <h3 class="wizard__heading">"How does posting work?"</h3>
                <p class="wizard__explainer">
                    "Connect your GitHub repo or paste a live URL. Our AI analyzes your app — \
                     readme, code, screenshots — and auto-generates a beautiful card for the \
                     feed. You can customize everything before posting."
                </p>
            </div>

            <div>
                <label class="wizard__label">
                    {icons::github()}
                    "GitHub Repository"
                </label>
                <input
                    class="wizard__input"
                    placeholder="https://github.com/you/your-app"
                    prop:value=move || draft.get().repo_url
                    on:input=move |ev| draft.update(|d| d.repo_url = event_target_value(&ev))
                />
            </div>

            <div class="wizard__divider">
                <span>"or"</span>
            </div>

            <div>
                <label class="wizard__label">
                    {icons::globe()}
                    "Live URL"
                </label>
                <input
                    class="wizard__input"
                    placeholder="https://your-app.vercel.app"
                    prop:value=move || draft.get().live_url
                    on:input=move |ev| draft.update(|d| d.live_url = event_target_value(&ev))
                />
            </div>

            <div class="wizard__magic-box">
                <h4 class="wizard__magic-heading">
                    {icons::wand()}
                    "AI Auto-generates your card"
                </h4>
                <ul class="wizard__magic-list">
                    <li>{icons::code()}"Reads your README, package.json, and code"</li>
                    <li>{icons::eye()}"Takes live screenshots of your deployed app"</li>
                    <li>{icons::sparkles()}"Generates title, tagline, description, and category"</li>
                    <li>{icons::palette()}"Picks a color theme matching your app's vibe"</li>
                </ul>
            </div>

            <button
                class="wizard__primary"
                disabled=move || !draft.get().can_analyze()
                on:click=on_analyze
            >
                {icons::wand()}
                "Analyze & Generate Card"
            </button>
        </div>
    }
}

#[component]
fn StepCustomize(draft: RwSignal<DraftState>) -> impl IntoView {
    let category_chips = move || {
        CATEGORIES[..8]
            .iter()
            .map(|meta| {
                let id = meta.id;
                view! {
                    <button
                        class="wizard__chip"
                        class:wizard__chip--selected=move || draft.get().category == id
                        on:click=move |_| draft.update(|d| d.category = id)
                    >
                        {format!("{} {}", meta.icon, meta.label)}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let gradient_swatches = move || {
        GRADIENT_CHOICES
            .iter()
            .enumerate()
            .map(|(i, token)| {
                view! {
                    <button
                        class="wizard__swatch"
                        class:wizard__swatch--selected=move || draft.get().gradient_index == i
                        style=format!("background: {}", gradient_css(token))
                        on:click=move |_| draft.update(|d| d.gradient_index = i)
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    let icon_chips = move || {
        ICON_CHOICES
            .iter()
            .enumerate()
            .map(|(i, icon)| {
                view! {
                    <button
                        class="wizard__icon-chip"
                        class:wizard__icon-chip--selected=move || draft.get().icon_index == i
                        on:click=move |_| draft.update(|d| d.icon_index = i)
                    >
                        {*icon}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !draft.get().analyzing
            fallback=|| {
                view! {
                    <div class="wizard__analyzing">
                        <span class="wizard__spinner">{icons::loader()}</span>
                        <p class="wizard__analyzing-title">"Analyzing your app..."</p>
                        <p class="wizard__analyzing-sub">
                            "Reading code, taking screenshots, generating card"
                        </p>
                    </div>
                }
            }
        >
            <div class="wizard__section">
                <div>
                    <label class="wizard__label">"App Name"</label>
                    <input
                        class="wizard__input"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="wizard__label">"Tagline"</label>
                    <input
                        class="wizard__input"
                        prop:value=move || draft.get().tagline
                        on:input=move |ev| draft.update(|d| d.tagline = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="wizard__label">"Description"</label>
                    <textarea
                        class="wizard__input wizard__input--area"
                        rows="3"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div>
                    <label class="wizard__label">"Category"</label>
                    <div class="wizard__chip-row">{category_chips}</div>
                </div>
                <div>
                    <label class="wizard__label">"Card Color Theme"</label>
                    <div class="wizard__chip-row">{gradient_swatches}</div>
                </div>
                <div>
                    <label class="wizard__label">"Icon"</label>
                    <div class="wizard__chip-row">{icon_chips}</div>
                </div>

                <div class="wizard__nav">
                    <button
                        class="wizard__secondary"
                        on:click=move |_| draft.update(|d| d.step = WizardStep::Connect)
                    >
                        "Back"
                    </button>
                    <button
                        class="wizard__primary"
                        on:click=move |_| draft.update(|d| d.step = WizardStep::Preview)
                    >
                        {icons::eye()}
                        "Preview Card"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn StepPreview(draft: RwSignal<DraftState>, close: Callback<()>) -> impl IntoView {
    let title = move || {
        let t = draft.get().title;
        if t.is_empty() { "Your App Name".to_owned() } else { t }
    };
    let tagline = move || {
        let t = draft.get().tagline;
        if t.is_empty() { "Your app tagline".to_owned() } else { t }
    };

    view! {
        <div class="wizard__section">
            <div class="wizard__preview-card">
                <div
                    class="wizard__preview-hero"
                    style=move || format!("background: {}", gradient_css(draft.get().gradient()))
                >
                    <span class="wizard__preview-icon">{move || draft.get().icon()}</span>
                </div>
                <div class="wizard__preview-body">
                    <div class="wizard__preview-builder">
                        <span>"👤"</span>
                        <span>"You"</span>
                    </div>
                    <h3 class="wizard__preview-title">{title}</h3>
                    <p class="wizard__preview-tagline">{tagline}</p>
                </div>
            </div>

            <p class="wizard__caption">"This is how your app will appear in the feed"</p>

            <Show when=move || !draft.get().live_url.is_empty()>
                <div class="wizard__live-box">
                    <h4 class="wizard__live-heading">
                        <span class="pulse-dot"></span>
                        "Interactive Preview Enabled"
                    </h4>
                    <p class="wizard__live-note">
                        "Users will be able to interact with your app directly in the feed \
                         card. We'll embed your live URL in a sandboxed iframe."
                    </p>
                </div>
            </Show>

            <div class="wizard__nav">
                <button
                    class="wizard__secondary"
                    on:click=move |_| draft.update(|d| d.step = WizardStep::Customize)
                >
                    "Back"
                </button>
                <button class="wizard__primary" on:click=move |_| close.run(())>
                    {icons::sparkles()}
                    "Post to Feed"
                </button>
            </div>
        </div>
    }
}
