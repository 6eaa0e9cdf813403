//! Status Line Component
//!
//! Shared progress/error line with a dismiss button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields, TxPhase};
use crate::view::notice_class;

#[component]
pub fn StatusLine() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    move || {
        store.notice().get().map(|notice| {
            let busy = store.tx().get() != TxPhase::Idle;
            view! {
                <div class=notice_class(&notice, busy)>
                    <span class="notice-text">{notice.text.clone()}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}
