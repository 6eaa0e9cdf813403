//! Read-only chain connection through alloy's HTTP provider.

use alloy_provider::{Provider, ReqwestProvider};
use alloy_transport::TransportError;
use url::Url;

use super::RpcError;
use crate::models::ConnectionInfo;

pub struct RpcProvider {
    inner: ReqwestProvider,
}

impl RpcProvider {
    pub fn new(url: Url) -> Self {
        Self {
            inner: ReqwestProvider::new_http(url),
        }
    }

    /// Network identity and block height for the diagnostics panel
    pub async fn connection_info(&self, contract_address: &str) -> Result<ConnectionInfo, RpcError> {
        let chain_id = self.inner.get_chain_id().await.map_err(rpc_error)?;
        let block_number = self.inner.get_block_number().await.map_err(rpc_error)?;
        Ok(ConnectionInfo::new(chain_id, block_number, contract_address))
    }
}

fn rpc_error(err: TransportError) -> RpcError {
    match err.as_error_resp() {
        Some(payload) => RpcError {
            code: payload.code,
            message: payload.message.to_string(),
        },
        None => RpcError::internal(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::INTERNAL_ERROR;
    use alloy_transport::TransportErrorKind;

    #[test]
    fn test_transport_failure_is_internal_error() {
        let err = rpc_error(TransportErrorKind::custom_str("connection refused"));
        assert_eq!(err.code, INTERNAL_ERROR);
        assert!(err.message.contains("connection refused"));
    }
}
