//! Wallet-injected provider (`window.ethereum`).

use js_sys::Reflect;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{Eip1193, RpcError, INTERNAL_ERROR};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Clone, Debug)]
    pub type Ethereum;

    #[wasm_bindgen(method, catch, js_name = request)]
    async fn send(this: &Ethereum, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    params: &'a Value,
}

/// Signing-capable connection through the browser wallet extension
#[derive(Clone, Debug)]
pub struct InjectedProvider {
    ethereum: Ethereum,
}

impl InjectedProvider {
    /// `Some` when a wallet extension has injected `window.ethereum`
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(Self {
            ethereum: ethereum.unchecked_into(),
        })
    }
}

impl Eip1193 for InjectedProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let args = RequestArguments {
            method,
            params: &params,
        }
        .serialize(&serializer)
        .map_err(|e| RpcError::internal(e.to_string()))?;

        tracing::debug!(target: "wallet", "request {}", method);
        let result = self
            .ethereum
            .send(args)
            .await
            .map_err(|e| decode_js_error(&e))?;

        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result).map_err(|e| RpcError::internal(e.to_string()))
    }
}

/// Wallet rejections are objects carrying `code` and `message`
fn decode_js_error(err: &JsValue) -> RpcError {
    let code = Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64)
        .unwrap_or(INTERNAL_ERROR);
    RpcError {
        code,
        message: js_error_message(err),
    }
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
