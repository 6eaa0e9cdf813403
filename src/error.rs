//! Error Types
//!
//! Every variant's `Display` is the message shown in the status line.

use thiserror::Error;

use crate::provider::RpcError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DappError {
    #[error("Missing environment variable: {0}")]
    MissingConfig(&'static str),

    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Please install MetaMask")]
    WalletMissing,

    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error("{0}")]
    Rpc(#[from] RpcError),

    #[error("ABI decoding error: {0}")]
    Abi(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transaction {0} reverted")]
    Reverted(String),
}

impl DappError {
    /// Configuration errors block the whole page; everything else is per-action
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            DappError::MissingConfig(_) | DappError::InvalidAddress(_) | DappError::InvalidRpcUrl(_)
        )
    }
}

impl From<alloy_sol_types::Error> for DappError {
    fn from(e: alloy_sol_types::Error) -> Self {
        DappError::Abi(e.to_string())
    }
}

impl From<serde_json::Error> for DappError {
    fn from(e: serde_json::Error) -> Self {
        DappError::InvalidResponse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DappError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_config_errors_are_config() {
        assert!(DappError::MissingConfig("TODO_RPC_URL").is_config());
        assert!(DappError::InvalidAddress("0x12".to_string()).is_config());
        assert!(!DappError::Rpc(RpcError::internal("connection refused")).is_config());
        assert!(!DappError::WalletMissing.is_config());
    }
}
