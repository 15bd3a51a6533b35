//! Payload input
//!
//! A plain textarea bound to the store's input text. Validation happens on
//! submit, in the controller, so nothing here blocks a submission.

use bfhl_console::application::{Action, ConsoleState};
use leptos::prelude::*;

use crate::api::UiController;

const PLACEHOLDER: &str =
    r#"Enter JSON input (e.g., {"data": ["A", "1", "B", "2"], "file_b64": ""})"#;

#[component]
pub fn JsonInput(state: RwSignal<ConsoleState>) -> impl IntoView {
    let controller = expect_context::<UiController>();

    view! {
        <textarea
            class="json-input"
            rows=6
            spellcheck="false"
            autocomplete="off"
            placeholder=PLACEHOLDER
            prop:value=move || state.with(|s| s.input.clone())
            on:input=move |ev| {
                controller.dispatch(Action::InputChanged(event_target_value(&ev)));
            }
        />
    }
}
