use bfhl_console::application::ConsoleState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

mod api;
mod components;

use api::{GlooTransport, UiController, API_BASE_URL};
use components::json_input::JsonInput;
use components::response_view::ResponseView;
use components::status_banner::StatusBanner;

#[component]
pub fn App() -> impl IntoView {
    let controller = UiController::new(GlooTransport::new(API_BASE_URL));

    // Mirror every store transition into a signal the views can track
    let state = RwSignal::new(controller.snapshot());
    controller
        .store()
        .subscribe(move |snapshot| state.set(snapshot.clone()));
    provide_context(controller.clone());

    {
        let controller = controller.clone();
        spawn_local(async move {
            controller.check_status().await;
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            if let Err(err) = controller.submit_current_input().await {
                log::debug!("Submission failed: {}", err);
            }
        });
    };

    let error = move || {
        state
            .with(|s| s.error().map(ToString::to_string))
            .map(|message| view! { <p class="error">{message}</p> })
    };

    view! {
        <div class="App">
            <h1>"BFHL Operation"</h1>
            <StatusBanner state=state />
            <form on:submit=on_submit>
                <JsonInput state=state />
                <button type="submit">
                    {move || if state.with(ConsoleState::is_submitting) { "Submitting..." } else { "Submit" }}
                </button>
            </form>
            {error}
            <Show when=move || state.with(|s| s.response().is_some())>
                <ResponseView state=state />
            </Show>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
