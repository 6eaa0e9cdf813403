//! Build-time Configuration
//!
//! RPC endpoint and contract address are captured from the build environment,
//! plus the fixed network descriptor the wallet is switched to.

use alloy_primitives::Address;
use serde::Serialize;
use url::Url;

use crate::error::{DappError, Result};

pub const RPC_URL_VAR: &str = "TODO_RPC_URL";
pub const CONTRACT_ADDRESS_VAR: &str = "TODO_CONTRACT_ADDRESS";

/// Receipt polling interval while awaiting confirmation
pub const RECEIPT_POLL_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub rpc_url: Url,
    pub contract_address: Address,
}

impl AppConfig {
    /// Read configuration captured at compile time
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(option_env!("TODO_RPC_URL"), option_env!("TODO_CONTRACT_ADDRESS"))
    }

    pub fn from_values(rpc_url: Option<&str>, contract_address: Option<&str>) -> Result<Self> {
        let raw_url = non_empty(rpc_url).ok_or(DappError::MissingConfig(RPC_URL_VAR))?;
        let rpc_url = Url::parse(raw_url).map_err(|_| DappError::InvalidRpcUrl(raw_url.to_string()))?;
        let raw_address =
            non_empty(contract_address).ok_or(DappError::MissingConfig(CONTRACT_ADDRESS_VAR))?;
        let contract_address = raw_address
            .parse::<Address>()
            .map_err(|_| DappError::InvalidAddress(raw_address.to_string()))?;

        Ok(Self {
            rpc_url,
            contract_address,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Native currency of a chain, as `wallet_addEthereumChain` expects it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Parameters for `wallet_addEthereumChain`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    pub chain_id: &'static str,
    pub chain_name: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: [&'static str; 1],
    pub block_explorer_urls: [&'static str; 1],
}

/// Filecoin Calibration testnet (chain id 314159)
pub const CALIBRATION: ChainDescriptor = ChainDescriptor {
    chain_id: "0x4cb2f",
    chain_name: "Filecoin - Calibration testnet",
    native_currency: NativeCurrency {
        name: "tFIL",
        symbol: "tFIL",
        decimals: 18,
    },
    rpc_urls: ["https://api.calibration.node.glif.io/rpc/v1"],
    block_explorer_urls: ["https://calibration.filscan.io"],
};
