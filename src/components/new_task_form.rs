//! New Task Form Component
//!
//! Compose input for `createTask`. Disabled while a creation is in flight.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::submit_label;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let creating = Memo::new(move |_| store.with(|s| s.is_creating()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create_task();
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Enter new task"
                disabled=move || creating.get()
                prop:value=move || store.draft().get()
                on:input=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        ctx.set_draft(input.value());
                    }
                }
            />
            <button type="submit" disabled=move || creating.get()>
                {move || store.with(|s| submit_label(s))}
            </button>
        </form>
    }
}
