//! Global Application State Store
//!
//! One state object for the whole page, changed only through [`reduce`].
//! Wrapped in a `reactive_stores::Store` for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ConnectionInfo, Task};

/// Page lifecycle
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    /// Configuration is unusable; nothing else is rendered
    Fatal(String),
}

/// Mutating contract call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Toggle(u64),
    Delete(u64),
}

impl Operation {
    /// Status shown while the wallet prompt is open
    pub fn prompt(&self) -> &'static str {
        match self {
            Operation::Create => "Waiting for MetaMask confirmation...",
            Operation::Toggle(_) => "Toggling task... Please confirm in MetaMask",
            Operation::Delete(_) => "Deleting task... Please confirm in MetaMask",
        }
    }
}

/// In-flight transaction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxPhase {
    #[default]
    Idle,
    Submitting(Operation),
    AwaitingConfirmation(Operation),
}

impl TxPhase {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            TxPhase::Idle => None,
            TxPhase::Submitting(op) | TxPhase::AwaitingConfirmation(op) => Some(*op),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Info,
    Error,
}

/// Single status line, shared by progress messages and errors
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

impl Notice {
    pub fn progress(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Progress }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Info }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Error }
    }
}

pub const SUBMITTED: &str = "Transaction submitted. Waiting for confirmation...";
pub const CONFIRMED: &str = "Transaction confirmed.";

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub phase: Phase,
    /// Captured once at startup; `None` when the network was unreachable
    pub connection: Option<ConnectionInfo>,
    pub account: Option<String>,
    /// `eth_requestAccounts` is open in the wallet
    pub connecting: bool,
    /// Last snapshot returned by `getTasks`
    pub tasks: Vec<Task>,
    pub tx: TxPhase,
    pub notice: Option<Notice>,
    /// Compose input text
    pub draft: String,
}

impl AppState {
    pub fn is_creating(&self) -> bool {
        self.tx.operation() == Some(Operation::Create)
    }

    pub fn is_busy(&self) -> bool {
        self.tx != TxPhase::Idle
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Initialized {
        connection: ConnectionInfo,
        account: Option<String>,
        tasks: Vec<Task>,
    },
    /// Configuration error
    InitFailed(String),
    /// Network or wallet error during startup; the page stays usable.
    /// `connection` is set when only the wallet step failed.
    StartupFailed {
        connection: Option<ConnectionInfo>,
        message: String,
    },
    Connecting,
    Connected {
        account: String,
        tasks: std::result::Result<Vec<Task>, String>,
    },
    ConnectFailed(String),
    ChainSwitchFailed(String),
    DraftChanged(String),
    /// Rejected before submission; phase is untouched
    Invalid(String),
    Begin(Operation),
    Submitted(Operation),
    Confirmed(Vec<Task>),
    Failed(String),
    DismissNotice,
}

/// Apply `action` to `state`. The only place the view-model changes.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::Initialized { connection, account, tasks } => {
            state.phase = Phase::Ready;
            state.connection = Some(connection);
            state.account = account;
            state.tasks = tasks;
        }
        Action::InitFailed(message) => {
            state.phase = Phase::Fatal(message);
        }
        Action::StartupFailed { connection, message } => {
            state.phase = Phase::Ready;
            state.connection = connection;
            state.notice = Some(Notice::error(format!("Error: {}", message)));
        }
        Action::Connecting => {
            state.connecting = true;
        }
        Action::Connected { account, tasks } => {
            state.connecting = false;
            state.account = Some(account);
            match tasks {
                Ok(tasks) => {
                    state.tasks = tasks;
                    state.notice = None;
                }
                Err(message) => {
                    state.notice = Some(Notice::error(format!("Error: {}", message)));
                }
            }
        }
        Action::ConnectFailed(message) => {
            state.connecting = false;
            state.notice = Some(Notice::error(message));
        }
        Action::ChainSwitchFailed(message) => {
            state.notice = Some(Notice::error(format!("Could not switch network: {}", message)));
        }
        Action::DraftChanged(text) => {
            if !state.is_creating() {
                state.draft = text;
            }
        }
        Action::Invalid(message) => {
            state.notice = Some(Notice::error(message));
        }
        Action::Begin(op) => {
            if state.is_busy() {
                return;
            }
            state.tx = TxPhase::Submitting(op);
            state.notice = Some(Notice::progress(op.prompt()));
        }
        Action::Submitted(op) => {
            if state.tx == TxPhase::Submitting(op) {
                state.tx = TxPhase::AwaitingConfirmation(op);
                state.notice = Some(Notice::progress(SUBMITTED));
            }
        }
        Action::Confirmed(tasks) => {
            if state.tx.operation() == Some(Operation::Create) {
                state.draft.clear();
            }
            state.tx = TxPhase::Idle;
            state.tasks = tasks;
            state.notice = Some(Notice::info(CONFIRMED));
        }
        Action::Failed(message) => {
            state.tx = TxPhase::Idle;
            state.notice = Some(Notice::error(format!("Error: {}", message)));
        }
        Action::DismissNotice => {
            state.notice = None;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Dispatch an action into the store
pub fn dispatch(store: &AppStore, action: Action) {
    tracing::debug!(target: "store", "{:?}", action);
    store.update(|state| reduce(state, action));
}
