//! Frontend Models
//!
//! Data structures mirrored from the on-chain contract and the network.

use serde::{Deserialize, Serialize};

/// Task data structure (matches the contract's `Task` tuple)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub completed: bool,
}

/// Network diagnostics captured once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub network: String,
    pub chain_id: u64,
    pub block_number: u64,
    pub contract_address: String,
}

impl ConnectionInfo {
    pub fn new(chain_id: u64, block_number: u64, contract_address: &str) -> Self {
        Self {
            network: network_name(chain_id).to_string(),
            chain_id,
            block_number,
            contract_address: contract_address.to_string(),
        }
    }

    /// Pretty JSON for the diagnostics panel
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Well-known network name for a chain id
pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "mainnet",
        314 => "filecoin",
        314159 => "calibration",
        11155111 => "sepolia",
        _ => "unknown",
    }
}

/// Shorten an address for display: 0x1234...abcd
pub fn short_address(address: &str) -> String {
    if address.len() < 10 || !address.is_char_boundary(6) || !address.is_char_boundary(address.len() - 4) {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
