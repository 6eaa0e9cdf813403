//! Scripted in-memory provider for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use alloy_primitives::{hex, U256};
use alloy_sol_types::SolValue;
use serde_json::{json, Value};

use super::{Eip1193, RpcError};
use crate::abi::TaskRecord;

pub const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
pub const ACCOUNT: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
pub const TX_HASH: &str = "0xabababababababababababababababababababababababababababababababab";

/// Replies with queued responses per method and records every request.
/// The last queued response for a method is repeated.
#[derive(Default)]
pub struct MockProvider {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, RpcError>>>>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &str, value: Value) {
        self.push(method, Ok(value));
    }

    pub fn fail(&self, method: &str, error: RpcError) {
        self.push(method, Err(error));
    }

    fn push(&self, method: &str, response: Result<Value, RpcError>) {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    /// Method names in request order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
    }

    /// Params of every request made for `method`
    pub fn params_of(&self, method: &str) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

impl Eip1193 for MockProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        self.calls.borrow_mut().push((method.to_string(), params));

        let mut responses = self.responses.borrow_mut();
        let queue = responses.get_mut(method).ok_or_else(|| RpcError {
            code: -32601,
            message: format!("the method {} does not exist", method),
        })?;
        match queue.len() {
            0 => Err(RpcError::internal("no scripted response")),
            1 => queue[0].clone(),
            _ => queue.pop_front().unwrap_or_else(|| Err(RpcError::internal("no scripted response"))),
        }
    }
}

/// ABI-encoded `getTasks()` return data, as `eth_call` would hand it back
pub fn tasks_result(tasks: &[(u64, &str, bool)]) -> Value {
    let records: Vec<TaskRecord> = tasks
        .iter()
        .map(|(id, description, completed)| TaskRecord {
            id: U256::from(*id),
            description: description.to_string(),
            completed: *completed,
        })
        .collect();
    json!(hex::encode_prefixed((records,).abi_encode_params()))
}

/// A mined EIP-1559 receipt in block 16
pub fn receipt(hash: &str, success: bool) -> Value {
    json!({
        "type": "0x2",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x5208",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "transactionHash": hash,
        "transactionIndex": "0x0",
        "blockHash": format!("0x{}", "cd".repeat(32)),
        "blockNumber": "0x10",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "from": ACCOUNT,
        "to": CONTRACT,
        "contractAddress": null,
    })
}
