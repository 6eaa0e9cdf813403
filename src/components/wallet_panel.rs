//! Wallet Panel Component
//!
//! Connect button until an account is known, then the account and compose form.

use leptos::prelude::*;

use crate::components::NewTaskForm;
use crate::context::AppContext;
use crate::models::short_address;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WalletPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    move || match store.account().get() {
        None => view! {
            <button
                class="connect-btn"
                disabled=move || store.connecting().get()
                on:click=move |_| ctx.connect()
            >
                {move || if store.connecting().get() { "Connecting..." } else { "Connect Wallet" }}
            </button>
        }
        .into_any(),
        Some(account) => view! {
            <div class="wallet-panel">
                <p class="account">"Connected: " {short_address(&account)}</p>
                <NewTaskForm />
            </div>
        }
        .into_any(),
    }
}
