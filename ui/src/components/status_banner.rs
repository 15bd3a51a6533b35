use bfhl_console::application::ConsoleState;
use bfhl_console::domain::ServerStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBanner(state: RwSignal<ConsoleState>) -> impl IntoView {
    let status = Memo::new(move |_| state.with(|s| s.status.clone()));

    let class = move || match status.get() {
        ServerStatus::Checking => "status status-checking",
        ServerStatus::Running { .. } => "status status-running",
        ServerStatus::Unreachable { .. } => "status status-down",
    };

    view! {
        <p class=class>{move || status.get().to_string()}</p>
    }
}
