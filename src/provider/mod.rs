//! Provider Adapters
//!
//! Chain connections: alloy's HTTP provider for startup diagnostics and the
//! wallet-injected `window.ethereum` behind an EIP-1193 request trait.

mod injected;
#[cfg(test)]
pub mod mock;
mod rpc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use injected::InjectedProvider;
pub use rpc::RpcProvider;

/// User rejected the request in the wallet
pub const USER_REJECTED: i64 = 4001;
/// Wallet already has a pending request of this kind
pub const REQUEST_PENDING: i64 = -32002;
/// Wallet does not know the requested chain
pub const UNRECOGNIZED_CHAIN: i64 = 4902;
/// JSON-RPC internal error, also used for transport failures
pub const INTERNAL_ERROR: i64 = -32603;

/// Error object returned by a provider request
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: message.into(),
        }
    }
}

/// EIP-1193 style request interface
#[allow(async_fn_in_trait)]
pub trait Eip1193 {
    async fn request(&self, method: &str, params: Value) -> std::result::Result<Value, RpcError>;
}

impl<P: Eip1193> Eip1193 for &P {
    async fn request(&self, method: &str, params: Value) -> std::result::Result<Value, RpcError> {
        (**self).request(method, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockProvider;
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_rpc_error_display_is_message() {
        let err = RpcError { code: USER_REJECTED, message: "User rejected the request.".to_string() };
        assert_eq!(err.to_string(), "User rejected the request.");
        assert_eq!(RpcError::internal("boom").code, INTERNAL_ERROR);
    }

    #[test]
    fn test_reference_forwards_requests() {
        let provider = MockProvider::new();
        provider.respond("eth_chainId", json!("0x4cb2f"));

        let by_ref = &provider;
        let value = block_on(Eip1193::request(&by_ref, "eth_chainId", json!([]))).unwrap();
        assert_eq!(value, json!("0x4cb2f"));
        assert_eq!(provider.calls(), vec!["eth_chainId"]);
    }
}
