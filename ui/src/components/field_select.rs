//! Multi-select of response fields.
//!
//! Selected fields are shown as removable chips in the order they were
//! picked; that order drives the projection.

use bfhl_console::application::{Action, ConsoleState};
use bfhl_console::domain::ResponseField;
use leptos::prelude::*;

use crate::api::UiController;

#[component]
pub fn FieldSelect(state: RwSignal<ConsoleState>) -> impl IntoView {
    let controller = expect_context::<UiController>();
    let (show_menu, set_show_menu) = signal(false);

    let selected = Memo::new(move |_| state.with(|s| s.selection.iter().collect::<Vec<_>>()));

    let chips = {
        let controller = controller.clone();
        move || {
            let fields = selected.get();
            if fields.is_empty() {
                return view! { <span class="field-placeholder">"Select fields..."</span> }
                    .into_any();
            }
            fields
                .into_iter()
                .map(|field| {
                    let controller = controller.clone();
                    view! {
                        <span class="field-chip">
                            {field.label()}
                            <button
                                type="button"
                                class="field-chip-remove"
                                aria-label=format!("Remove {}", field.label())
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    controller.dispatch(Action::FieldToggled(field));
                                }
                            >
                                "×"
                            </button>
                        </span>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    let clear = {
        let controller = controller.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            controller.dispatch(Action::SelectionReplaced(Vec::new()));
        }
    };

    let options = move || {
        let controller = controller.clone();
        ResponseField::ALL
            .into_iter()
            .map(|field| {
                let controller = controller.clone();
                let checked = move || selected.with(|s| s.contains(&field));
                view! {
                    <label class="field-option">
                        <input
                            type="checkbox"
                            prop:checked=checked
                            on:change=move |_| {
                                controller.dispatch(Action::FieldToggled(field));
                            }
                        />
                        {field.label()}
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <div class="field-select">
            <div class="field-control" on:click=move |_| set_show_menu.update(|v| *v = !*v)>
                <div class="field-chips">{chips}</div>
                <button type="button" class="field-clear" on:click=clear>"Clear"</button>
            </div>
            <Show when=move || show_menu.get()>
                <div class="field-menu">{options.clone()}</div>
            </Show>
        </div>
    }
}
