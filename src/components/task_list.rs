//! Task List Component
//!
//! Renders the last confirmed snapshot, or the empty-state message.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{empty_state, task_rows};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();
    let rows = Memo::new(move |_| store.tasks().with(|tasks| task_rows(tasks)));

    view! {
        <section class="task-list">
            <h3>"Tasks:"</h3>
            <ul>
                <For
                    each=move || rows.get()
                    key=|row| (row.id, row.completed, row.description.clone())
                    children=move |row| view! { <TaskItem row=row /> }
                />
                {move || store.tasks().with(|tasks| empty_state(tasks)).map(|text| view! {
                    <li class="empty-state">{text}</li>
                })}
            </ul>
        </section>
    }
}
