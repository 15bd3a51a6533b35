use bfhl_console::application::ConsoleState;
use leptos::prelude::*;

use super::field_select::FieldSelect;

/// Projected response; recomputed from the current state on every render
#[component]
pub fn ResponseView(state: RwSignal<ConsoleState>) -> impl IntoView {
    let projected = move || {
        state.with(|s| {
            s.projection()
                .map(|projection| projection.to_pretty_json())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="response">
            <h2>"Response:"</h2>
            <FieldSelect state=state />
            <pre class="response-json">{projected}</pre>
        </div>
    }
}
