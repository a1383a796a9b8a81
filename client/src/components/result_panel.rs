//! Result panel showing the category, explanation, and suggested reply.

#[cfg(test)]
#[path = "result_panel_test.rs"]
mod result_panel_test;

use leptos::prelude::*;
use triage::Classification;

use crate::state::submission::SubmissionState;

/// Labelled rows rendered for a classification, in display order.
pub fn result_rows(result: &Classification) -> [(&'static str, String); 3] {
    [
        ("Category", result.category.clone()),
        ("Reason", result.explanation.clone()),
        ("Suggested reply", result.suggested_reply.clone()),
    ]
}

/// Renders the last successful classification, if any.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<SubmissionState>>();

    view! {
        {move || {
            state
                .get()
                .result
                .map(|result| {
                    let rows = result_rows(&result)
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="result-panel__row">
                                    <strong class="result-panel__label">{label}": "</strong>
                                    <span class="result-panel__value">{value}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>();
                    view! { <section class="result-panel">{rows}</section> }
                })
        }}
    }
}
