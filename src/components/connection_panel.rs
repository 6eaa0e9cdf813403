//! Connection Info Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Network diagnostics captured at startup
#[component]
pub fn ConnectionPanel() -> impl IntoView {
    let store = use_app_store();
    let json = move || {
        store
            .connection()
            .get()
            .map(|info| info.to_pretty_json())
            .unwrap_or_else(|| "Network unavailable".to_string())
    };

    view! {
        <section class="connection-info">
            <h3>"Connection Info:"</h3>
            <pre>{json}</pre>
        </section>
    }
}
