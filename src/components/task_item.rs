//! Task Item Component
//!
//! A single task row: checkbox toggles, delete asks for confirmation.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields, TxPhase};
use crate::view::TaskRow;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = row.id;
    let busy = Signal::derive(move || store.tx().get() != TxPhase::Idle);

    view! {
        <li class=row.class>
            <input
                type="checkbox"
                checked=row.completed
                disabled=move || busy.get()
                on:click=move |ev| {
                    // Checkbox follows confirmed state only
                    ev.prevent_default();
                    ctx.toggle_task(id);
                }
            />
            <span class="task-text">{row.description}</span>
            <DeleteConfirmButton
                disabled=busy
                on_confirm=move |_| ctx.delete_task(id)
            />
        </li>
    }
}
