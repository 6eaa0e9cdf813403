//! Chain Todo App
//!
//! Root component: startup sequence and page layout.

use alloy_primitives::Address;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ConnectionPanel, StatusLine, TaskList, WalletPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::contract::TodoContract;
use crate::error::Result;
use crate::models::Task;
use crate::provider::{Eip1193, InjectedProvider, RpcProvider};
use crate::store::{dispatch, Action, AppState, AppStateStoreFields, Phase};
use crate::wallet;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    match AppConfig::from_build_env() {
        Ok(config) => {
            provide_context(AppContext::new(store, config.contract_address));
            spawn_local(async move {
                dispatch(&store, initialize(&config).await);
            });
        }
        Err(e) => {
            tracing::error!(target: "app", "initialization error: {}", e);
            dispatch(&store, Action::InitFailed(e.to_string()));
        }
    }

    view! {
        {move || match store.phase().get() {
            Phase::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
            Phase::Fatal(message) => view! {
                <div class="fatal-error">
                    <h1>"Decentralized Todo List"</h1>
                    <p class="notice error">{message}</p>
                </div>
            }.into_any(),
            Phase::Ready => view! { <MainView /> }.into_any(),
        }}
    }
}

#[component]
fn MainView() -> impl IntoView {
    view! {
        <main class="app-layout">
            <h1>"📝 Decentralized Todo List"</h1>
            <ConnectionPanel />
            <StatusLine />
            <WalletPanel />
            <TaskList />
        </main>
    }
}

/// Read network metadata, then the task list if the wallet already trusts this site.
/// Only configuration errors are fatal; anything failing here leaves the page usable.
async fn initialize(config: &AppConfig) -> Action {
    let contract_address = config.contract_address.to_string();
    let connection = match RpcProvider::new(config.rpc_url.clone())
        .connection_info(&contract_address)
        .await
    {
        Ok(connection) => connection,
        Err(e) => {
            tracing::error!(target: "app", "network unreachable: {}", e);
            return Action::StartupFailed { connection: None, message: e.to_string() };
        }
    };
    tracing::info!(target: "app", "network {} (chain {}) at block {}", connection.network, connection.chain_id, connection.block_number);

    let wallet = InjectedProvider::detect();
    match load_session(wallet.as_ref(), config.contract_address).await {
        Ok((account, tasks)) => Action::Initialized { connection, account, tasks },
        Err(e) => {
            tracing::error!(target: "app", "restoring wallet session: {}", e);
            Action::StartupFailed { connection: Some(connection), message: e.to_string() }
        }
    }
}

/// Account already authorized for this site and its task list, if any
pub async fn load_session<W: Eip1193>(
    wallet: Option<&W>,
    contract_address: Address,
) -> Result<(Option<String>, Vec<Task>)> {
    let Some(wallet) = wallet else {
        return Ok((None, Vec::new()));
    };
    let account = wallet::authorized_account(wallet).await?;
    let tasks = match &account {
        Some(account) => {
            let tasks = TodoContract::new(wallet, contract_address)
                .get_tasks(Some(account))
                .await?;
            tracing::info!(target: "app", "loaded {} tasks", tasks.len());
            tasks
        }
        None => Vec::new(),
    };
    Ok((account, tasks))
}
