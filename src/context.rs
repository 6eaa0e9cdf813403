//! Application Context
//!
//! User intents (connect, create, toggle, delete) provided via Context API.
//! Each intent runs on `spawn_local` and reports back through the store.

use alloy_primitives::Address;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::CALIBRATION;
use crate::contract::{validate_create, TodoContract};
use crate::error::{DappError, Result};
use crate::models::Task;
use crate::provider::{Eip1193, InjectedProvider};
use crate::store::{dispatch, Action, AppStore, Operation};
use crate::wallet::{self, ChainSwitch};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    contract_address: Address,
}

impl AppContext {
    pub fn new(store: AppStore, contract_address: Address) -> Self {
        Self { store, contract_address }
    }

    /// Request wallet authorization, switch network, then load tasks.
    /// Ignored while a previous request is still open in the wallet.
    pub fn connect(&self) {
        let store = self.store;
        let address = self.contract_address;
        if store.with_untracked(|s| s.connecting) {
            tracing::debug!(target: "wallet", "connect ignored, request already pending");
            return;
        }
        dispatch(&store, Action::Connecting);
        spawn_local(async move {
            let provider = InjectedProvider::detect();
            let connection = match wallet::connect(provider.as_ref(), &CALIBRATION).await {
                Ok(connection) => connection,
                Err(e) => {
                    tracing::error!(target: "wallet", "connection error: {}", e);
                    dispatch(&store, Action::ConnectFailed(e.to_string()));
                    return;
                }
            };

            let tasks = match &provider {
                Some(provider) => TodoContract::new(provider, address)
                    .get_tasks(Some(&connection.account))
                    .await
                    .map_err(|e| {
                        tracing::error!(target: "contract", "loading tasks after connect: {}", e);
                        e.to_string()
                    }),
                None => Err(DappError::WalletMissing.to_string()),
            };

            dispatch(&store, Action::Connected { account: connection.account, tasks });
            if let ChainSwitch::Failed(err) = connection.chain {
                dispatch(&store, Action::ChainSwitchFailed(err.message));
            }
        });
    }

    pub fn create_task(&self) {
        self.mutate(Operation::Create);
    }

    pub fn toggle_task(&self, id: u64) {
        self.mutate(Operation::Toggle(id));
    }

    pub fn delete_task(&self, id: u64) {
        self.mutate(Operation::Delete(id));
    }

    pub fn set_draft(&self, text: String) {
        dispatch(&self.store, Action::DraftChanged(text));
    }

    pub fn dismiss_notice(&self) {
        dispatch(&self.store, Action::DismissNotice);
    }

    /// Submit → await confirmation → re-fetch the whole list
    fn mutate(&self, op: Operation) {
        let store = self.store;
        let address = self.contract_address;

        let (busy, account, draft) =
            store.with_untracked(|s| (s.is_busy(), s.account.clone(), s.draft.clone()));
        if busy {
            tracing::debug!(target: "app", "{:?} ignored, another transaction is in flight", op);
            return;
        }

        let Some(provider) = InjectedProvider::detect() else {
            dispatch(&store, Action::Invalid(format!("Error: {}", DappError::WalletMissing)));
            return;
        };
        let checked = match op {
            Operation::Create => validate_create(account.as_deref(), &draft),
            _ => account.as_ref().map(|_| ()).ok_or(DappError::NotConnected),
        };
        if let Err(e) = checked {
            dispatch(&store, Action::Invalid(format!("Error: {}", e)));
            return;
        }

        dispatch(&store, Action::Begin(op));
        spawn_local(async move {
            let contract = TodoContract::new(provider, address);
            let report = |action| dispatch(&store, action);
            match submit_and_refresh(&contract, op, account.as_deref(), &draft, report).await {
                Ok(tasks) => dispatch(&store, Action::Confirmed(tasks)),
                Err(e) => {
                    tracing::error!(target: "contract", "{:?} failed: {}", op, e);
                    dispatch(&store, Action::Failed(e.to_string()));
                }
            }
        });
    }
}

/// Submit `op`, wait for its receipt, then read the whole list back.
/// `Submitted` is reported through `report` once the wallet returns a hash.
pub async fn submit_and_refresh<P: Eip1193>(
    contract: &TodoContract<P>,
    op: Operation,
    account: Option<&str>,
    draft: &str,
    report: impl Fn(Action),
) -> Result<Vec<Task>> {
    let pending = match op {
        Operation::Create => contract.create_task(account, draft).await?,
        Operation::Toggle(id) => contract.toggle_complete(account, id).await?,
        Operation::Delete(id) => contract.delete_task(account, id).await?,
    };
    tracing::info!(target: "contract", "{:?} submitted as {}", op, pending.hash);
    report(Action::Submitted(op));

    contract.confirm(&pending).await?;
    contract.get_tasks(account).await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::provider::mock::{receipt, tasks_result, MockProvider, ACCOUNT, CONTRACT, TX_HASH};
    use crate::provider::{RpcError, USER_REJECTED};
    use crate::store::{reduce, AppState, TxPhase};
    use futures::executor::block_on;
    use serde_json::json;

    fn contract(provider: &MockProvider) -> TodoContract<&MockProvider> {
        TodoContract::new(provider, CONTRACT.parse().unwrap())
    }

    fn connected() -> AppState {
        AppState {
            account: Some(ACCOUNT.to_string()),
            draft: "Buy milk".to_string(),
            ..AppState::default()
        }
    }

    #[test]
    fn test_create_submits_confirms_then_refreshes() {
        let provider = MockProvider::new();
        provider.respond("eth_sendTransaction", json!(TX_HASH));
        provider.respond("eth_getTransactionReceipt", receipt(TX_HASH, true));
        provider.respond("eth_call", tasks_result(&[(0, "Buy milk", false)]));

        let mut state = connected();
        reduce(&mut state, Action::Begin(Operation::Create));

        let reported = RefCell::new(Vec::new());
        let tasks = block_on(submit_and_refresh(
            &contract(&provider),
            Operation::Create,
            Some(ACCOUNT),
            "Buy milk",
            |action| reported.borrow_mut().push(action),
        ))
        .unwrap();

        assert_eq!(
            provider.calls(),
            vec!["eth_sendTransaction", "eth_getTransactionReceipt", "eth_call"]
        );
        assert_eq!(provider.params_of("eth_call")[0][0]["from"], ACCOUNT);
        assert_eq!(reported.borrow().as_slice(), &[Action::Submitted(Operation::Create)]);

        for action in reported.take() {
            reduce(&mut state, action);
        }
        assert_eq!(state.tx, TxPhase::AwaitingConfirmation(Operation::Create));
        reduce(&mut state, Action::Confirmed(tasks));

        assert_eq!(state.tx, TxPhase::Idle);
        assert_eq!(
            state.tasks,
            vec![Task { id: 0, description: "Buy milk".to_string(), completed: false }]
        );
        assert_eq!(state.draft, "");
    }

    #[test]
    fn test_rejection_skips_confirmation_and_refresh() {
        let provider = MockProvider::new();
        provider.fail(
            "eth_sendTransaction",
            RpcError { code: USER_REJECTED, message: "User denied transaction signature.".to_string() },
        );

        let reported = RefCell::new(Vec::new());
        let err = block_on(submit_and_refresh(
            &contract(&provider),
            Operation::Delete(1),
            Some(ACCOUNT),
            "",
            |action| reported.borrow_mut().push(action),
        ))
        .unwrap_err();

        assert_eq!(err.to_string(), "User denied transaction signature.");
        assert_eq!(provider.calls(), vec!["eth_sendTransaction"]);
        assert!(reported.borrow().is_empty());
    }

    #[test]
    fn test_reverted_transaction_is_not_refreshed() {
        let provider = MockProvider::new();
        provider.respond("eth_sendTransaction", json!(TX_HASH));
        provider.respond("eth_getTransactionReceipt", receipt(TX_HASH, false));

        let err = block_on(submit_and_refresh(
            &contract(&provider),
            Operation::Toggle(0),
            Some(ACCOUNT),
            "",
            |_| {},
        ))
        .unwrap_err();

        assert_eq!(err, DappError::Reverted(TX_HASH.to_string()));
        assert!(provider.params_of("eth_call").is_empty());
    }
}
