//! Wallet Session
//!
//! Account authorization and network switching through the injected wallet.

use serde_json::{json, Value};

use crate::config::ChainDescriptor;
use crate::error::{DappError, Result};
use crate::provider::{Eip1193, RpcError, UNRECOGNIZED_CHAIN};

/// Outcome of moving the wallet onto the target chain
#[derive(Debug, Clone, PartialEq)]
pub enum ChainSwitch {
    /// Wallet already knew the chain and switched
    Switched,
    /// Chain was registered first, then switched
    Added,
    /// Non-fatal; the session stays connected on whatever chain the wallet is on
    Failed(RpcError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub account: String,
    pub chain: ChainSwitch,
}

fn first_account(value: &Value) -> Result<Option<String>> {
    let accounts = value
        .as_array()
        .ok_or_else(|| DappError::InvalidResponse(format!("expected account list, got {}", value)))?;
    Ok(accounts.first().and_then(Value::as_str).map(str::to_string))
}

/// Account the site is already authorized for, without prompting
pub async fn authorized_account<P: Eip1193>(provider: &P) -> Result<Option<String>> {
    let accounts = provider.request("eth_accounts", json!([])).await?;
    first_account(&accounts)
}

/// Ask for authorization and move the wallet onto `chain`
pub async fn connect<P: Eip1193>(provider: Option<&P>, chain: &ChainDescriptor) -> Result<Connection> {
    let provider = provider.ok_or(DappError::WalletMissing)?;
    let accounts = provider.request("eth_requestAccounts", json!([])).await?;
    let account = first_account(&accounts)?.ok_or(DappError::NoAccounts)?;
    tracing::info!(target: "wallet", "connected {}", account);

    let chain = switch_chain(provider, chain).await;
    Ok(Connection { account, chain })
}

async fn request_switch<P: Eip1193>(provider: &P, chain: &ChainDescriptor) -> std::result::Result<Value, RpcError> {
    provider
        .request("wallet_switchEthereumChain", json!([{ "chainId": chain.chain_id }]))
        .await
}

/// Switch to `chain`, registering it first if the wallet reports it unknown
pub async fn switch_chain<P: Eip1193>(provider: &P, chain: &ChainDescriptor) -> ChainSwitch {
    let err = match request_switch(provider, chain).await {
        Ok(_) => return ChainSwitch::Switched,
        Err(err) => err,
    };
    if err.code != UNRECOGNIZED_CHAIN {
        tracing::warn!(target: "wallet", "chain switch failed: {} ({})", err.message, err.code);
        return ChainSwitch::Failed(err);
    }

    let params = match serde_json::to_value(chain) {
        Ok(descriptor) => json!([descriptor]),
        Err(e) => return ChainSwitch::Failed(RpcError::internal(e.to_string())),
    };
    if let Err(err) = provider.request("wallet_addEthereumChain", params).await {
        tracing::warn!(target: "wallet", "adding {} failed: {} ({})", chain.chain_name, err.message, err.code);
        return ChainSwitch::Failed(err);
    }

    match request_switch(provider, chain).await {
        Ok(_) => ChainSwitch::Added,
        Err(err) => {
            tracing::warn!(target: "wallet", "chain switch after add failed: {} ({})", err.message, err.code);
            ChainSwitch::Failed(err)
        }
    }
}
