//! Error panel for validation and request failures.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;

#[component]
pub fn ErrorPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<SubmissionState>>();

    view! {
        <Show when=move || state.get().error.is_some()>
            <p class="error-panel" role="alert">
                {move || state.get().error.unwrap_or_default()}
            </p>
        </Show>
    }
}
