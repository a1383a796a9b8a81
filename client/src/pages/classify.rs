//! Classification page: text/file form, loading indicator, and outcome panels.

use leptos::prelude::*;
use triage::ApiConfig;

use crate::components::error_panel::ErrorPanel;
use crate::components::result_panel::ResultPanel;
use crate::net::api::BrowserFile;
use crate::state::submission::{SubmissionState, precedence_notice};

#[component]
pub fn ClassifyPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SubmissionState>>();
    let config = expect_context::<ApiConfig>();

    let text = RwSignal::new(String::new());
    let has_file = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text_value = text.get_untracked();
        let file = selected_file(file_input);
        let Some(submission) = state.try_update(|s| s.start(&text_value, file)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::process_submission(&config, &submission).await;
                state.update(|s| s.complete(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, submission);
        }
    };

    view! {
        <main class="triage-page">
            <h1>"Email Triage"</h1>
            <form class="triage-form" on:submit=on_submit>
                <textarea
                    class="triage-form__text"
                    rows="10"
                    placeholder="Paste the email text here..."
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="triage-form__file"
                    type="file"
                    accept=".txt,.pdf"
                    node_ref=file_input
                    on:change=move |_| has_file.set(selected_file(file_input).is_some())
                />
                {move || {
                    precedence_notice(&text.get(), has_file.get())
                        .map(|notice| view! { <p class="triage-form__notice">{notice}</p> })
                }}
                <button
                    class="triage-form__submit"
                    type="submit"
                    disabled=move || state.get().submit_disabled()
                >
                    "Classify"
                </button>
            </form>
            <Show when=move || state.get().loading>
                <div class="triage-loading">"Processing..."</div>
            </Show>
            <ErrorPanel/>
            <ResultPanel/>
        </main>
    }
}

/// First file chosen in the picker, read at call time.
fn selected_file(input: NodeRef<leptos::html::Input>) -> Option<BrowserFile> {
    #[cfg(feature = "hydrate")]
    {
        input.get_untracked()?.files()?.get(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}
