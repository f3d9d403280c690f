//! Portfolio landing page: bio, project accordion, contact links.

use leptos::prelude::*;

use crate::components::icons;

struct ProjectRow {
    title: &'static str,
    built_with: &'static str,
    short: &'static str,
    full: &'static str,
    url: Option<&'static str>,
}

const PROJECTS: &[ProjectRow] = &[
    ProjectRow {
        title: "Fairway",
        built_with: "Lovable",
        short: "Golf scorecard app",
        full: "A mobile-friendly golf scorecard with real USGA handicap calculations, \
               multiple game modes, and round history. Built to see how far an AI app \
               builder could take a real sports utility.",
        url: Some("https://www.golf-the-fair-way.com/"),
    },
    ProjectRow {
        title: "Arena",
        built_with: "Lovable",
        short: "Fantasy sports side-betting app",
        full: "A side-betting layer for Sleeper fantasy football leagues — place bets on \
               weekly matchups with friends. Built to explore real-time API integrations \
               and multi-user flows with AI tooling.",
        url: Some("https://fantasy-arena.lovable.app/"),
    },
    ProjectRow {
        title: "contacts-db",
        built_with: "Claude Code",
        short: "Founder/investor CRM",
        full: "A personal CRM that auto-tags founders and investors from LinkedIn imports \
               and suggests introductions between them. My first fully AI-coded app from \
               scratch.",
        url: Some("https://contacts-db.thramsy.com/"),
    },
    ProjectRow {
        title: "Spenduh",
        built_with: "Bolt",
        short: "Daily expense tracker",
        full: "A daily expense tracker with spending streaks, calendar heat maps, and \
               analytics. Built to compare AI code generators side-by-side.",
        url: Some("https://spenduh.thramsy.com/"),
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    // Single-open accordion: opening one project collapses the rest.
    let open_project = RwSignal::new(None::<usize>);

    let project_cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let is_open = move || open_project.get() == Some(i);
            view! {
                <div class="portfolio__project" class:portfolio__project--open=is_open>
                    <button
                        class="portfolio__project-trigger"
                        on:click=move |_| {
                            open_project.update(|open| {
                                *open = if *open == Some(i) { None } else { Some(i) };
                            });
                        }
                    >
                        <span class="portfolio__project-heading">
                            <span class="portfolio__project-title">{project.title}</span>
                            <span class="portfolio__project-badge">{project.built_with}</span>
                        </span>
                        <span class="portfolio__project-short">{project.short}</span>
                    </button>
                    <Show when=is_open>
                        <div class="portfolio__project-body">
                            <p class="portfolio__project-full">{project.full}</p>
                            {match project.url {
                                Some(url) => {
                                    view! {
                                        <a
                                            class="portfolio__project-link"
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "View project"
                                            {icons::arrow_right()}
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <span class="portfolio__project-request">
                                            "Available upon request"
                                        </span>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </Show>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <main class="portfolio">
            <div class="portfolio__inner">
                <section class="portfolio__hero">
                    <div class="portfolio__avatar" aria-hidden="true">"KH"</div>
                    <h1 class="portfolio__name">"Kevin Hu-Thrams"</h1>
                    <p class="portfolio__bio">
                        "Originally born & raised in Germany, I moved to the Bay Area in 2017 \
                         to learn and build alongside the best. Historically a Fintech PM, \
                         I'm now exploring new business ideas across AI, consumer and sports."
                    </p>
                    <p class="portfolio__bio">
                        "The projects below are experiments I built using AI tools like \
                         Claude Code, Lovable, and Bolt — from idea to deployed app, with \
                         zero hand-written code. Each one was a way to stress-test what's \
                         possible when a PM picks up AI as a building tool. Let's connect!"
                    </p>
                </section>

                <section class="portfolio__section">
                    <h2 class="portfolio__label">"Projects"</h2>
                    {project_cards}
                    <a class="portfolio__project portfolio__feed-entry" href="/appfeed">
                        <span class="portfolio__project-heading">
                            <span class="portfolio__project-title">"AppFeed"</span>
                            <span class="portfolio__project-badge portfolio__project-badge--live">
                                "Live prototype"
                            </span>
                        </span>
                        <span class="portfolio__project-short">
                            "A social feed where every post is a working mini-app"
                        </span>
                    </a>
                </section>

                <section class="portfolio__section">
                    <h2 class="portfolio__label">"Contact"</h2>
                    <div class="portfolio__contacts">
                        <a
                            class="portfolio__contact"
                            href="https://www.linkedin.com/in/kevinthrams/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {icons::linkedin()}
                            <span>"LinkedIn"</span>
                        </a>
                        <a class="portfolio__contact" href="mailto:kevin.thrams@gmail.com">
                            {icons::mail()}
                            <span>"Email"</span>
                        </a>
                    </div>
                </section>
            </div>
        </main>
    }
}
