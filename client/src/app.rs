//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::classify::ClassifyPage;
use crate::state::submission::SubmissionState;
use crate::util::api_base::{API_BASE_META, current_api_config};

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "app_test.rs"]
mod tests;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is written into a `<meta>` tag so the hydrated page talks to
/// the same backend the host process was configured with.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {api_base_meta(api_base)}
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

/// `<meta>` tag carrying the backend base URL for [`current_api_config`].
fn api_base_meta(api_base: String) -> impl IntoView {
    view! { <meta name=API_BASE_META content=api_base/> }
}

/// Root application component.
///
/// Provides the submission state and API config, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let submission = RwSignal::new(SubmissionState::default());
    provide_context(submission);
    provide_context(current_api_config());

    view! {
        <Stylesheet id="leptos" href="/pkg/triage.css"/>
        <Title text="Email Triage"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ClassifyPage/>
            </Routes>
        </Router>
    }
}
