//! Delete Confirm Button Component
//!
//! Inline delete with confirm/cancel, so a stray click never costs a transaction.

use leptos::prelude::*;

/// Shows "Delete" first; once clicked, "Delete?" with ✓/✗.
///
/// # Arguments
/// * `disabled` - Disable the initial button (e.g. while a transaction is in flight)
/// * `on_confirm` - Callback run when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    disabled=move || disabled.get()
                    on:click=move |_| set_confirming.set(true)
                >
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
