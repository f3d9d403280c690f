//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{feed::FeedPage, home::HomePage};
use crate::state::{feed::FeedState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let feed = RwSignal::new(FeedState::default());

    provide_context(ui);
    provide_context(feed);

    // Dark mode preference is browser state; pick it up once after hydration.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/appfeed-ui.css"/>
        <Title text="Kevin Hu-Thrams"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("appfeed") view=FeedPage/>
            </Routes>
        </Router>
    }
}
