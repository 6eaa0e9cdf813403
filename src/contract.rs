//! Contract Client
//!
//! Typed proxy over the to-do list contract. Reads go through `eth_call`,
//! mutations through `eth_sendTransaction` on the wallet provider.

use alloy_primitives::{hex, Address};
use alloy_rpc_types_eth::TransactionReceipt;
use gloo_timers::future::TimeoutFuture;
use serde_json::{json, Value};

use crate::abi;
use crate::config::RECEIPT_POLL_MS;
use crate::error::{DappError, Result};
use crate::models::Task;
use crate::provider::Eip1193;

/// A submitted transaction awaiting confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTx {
    pub hash: String,
}

/// Checks run before anything is sent to the wallet
pub fn validate_create(account: Option<&str>, description: &str) -> Result<()> {
    if account.is_none() {
        return Err(DappError::NotConnected);
    }
    if description.trim().is_empty() {
        return Err(DappError::EmptyDescription);
    }
    Ok(())
}

pub struct TodoContract<P> {
    provider: P,
    address: Address,
}

impl<P: Eip1193> TodoContract<P> {
    pub fn new(provider: P, address: Address) -> Self {
        Self { provider, address }
    }

    /// `from` is set when known so the call runs as the connected account
    pub async fn get_tasks(&self, from: Option<&str>) -> Result<Vec<Task>> {
        let mut call = json!({
            "to": self.address.to_string(),
            "data": hex::encode_prefixed(abi::encode_get_tasks()),
        });
        if let Some(from) = from {
            call["from"] = json!(from);
        }
        let result = self.provider.request("eth_call", json!([call, "latest"])).await?;
        let text = result
            .as_str()
            .ok_or_else(|| DappError::InvalidResponse(format!("eth_call returned {}", result)))?;
        let data = hex::decode(text).map_err(|e| DappError::InvalidResponse(e.to_string()))?;
        abi::decode_get_tasks(&data)
    }

    pub async fn create_task(&self, from: Option<&str>, description: &str) -> Result<PendingTx> {
        validate_create(from, description)?;
        let from = from.ok_or(DappError::NotConnected)?;
        tracing::info!(target: "contract", "createTask({:?}) from {}", description, from);
        self.send(from, abi::encode_create_task(description)).await
    }

    pub async fn toggle_complete(&self, from: Option<&str>, id: u64) -> Result<PendingTx> {
        let from = from.ok_or(DappError::NotConnected)?;
        tracing::info!(target: "contract", "toggleComplete({}) from {}", id, from);
        self.send(from, abi::encode_toggle_complete(id)).await
    }

    pub async fn delete_task(&self, from: Option<&str>, id: u64) -> Result<PendingTx> {
        let from = from.ok_or(DappError::NotConnected)?;
        tracing::info!(target: "contract", "deleteTask({}) from {}", id, from);
        self.send(from, abi::encode_delete_task(id)).await
    }

    async fn send(&self, from: &str, data: Vec<u8>) -> Result<PendingTx> {
        let tx = json!({
            "from": from,
            "to": self.address.to_string(),
            "data": hex::encode_prefixed(data),
        });
        let result = self.provider.request("eth_sendTransaction", json!([tx])).await?;
        let hash = result
            .as_str()
            .ok_or_else(|| DappError::InvalidResponse(format!("eth_sendTransaction returned {}", result)))?;
        Ok(PendingTx {
            hash: hash.to_string(),
        })
    }

    /// Poll until the transaction has a receipt. No timeout.
    pub async fn confirm(&self, pending: &PendingTx) -> Result<TransactionReceipt> {
        loop {
            let result = self
                .provider
                .request("eth_getTransactionReceipt", json!([pending.hash]))
                .await?;
            if !result.is_null() {
                let receipt: TransactionReceipt = serde_json::from_value(result)?;
                if !receipt.status() {
                    return Err(DappError::Reverted(pending.hash.clone()));
                }
                tracing::info!(target: "contract", "{} confirmed in block {:?}", pending.hash, receipt.block_number);
                return Ok(receipt);
            }
            TimeoutFuture::new(RECEIPT_POLL_MS).await;
        }
    }
}
