//! Read-only contract calls over JSON-RPC.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so read failures degrade UI behavior
//! (loading/error state, unverifiable checks) without crashing hydration.
//! Request bodies, calldata, and response parsing are pure helpers so the
//! whole wire shape is testable natively.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use governance::{Address, U256, abi, hex};

/// Build a JSON-RPC 2.0 request envelope.
#[must_use]
pub fn request_body(method: &str, params: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    })
}

/// `eth_call` params for a read against `to` with raw calldata.
#[must_use]
pub fn eth_call_params(to: Address, data: &[u8]) -> serde_json::Value {
    serde_json::json!([
        { "to": to.to_string(), "data": format!("0x{}", hex::encode(data)) },
        "latest",
    ])
}

/// Calldata for `balanceOf(address)`.
#[must_use]
pub fn balance_of_calldata(holder: Address) -> Vec<u8> {
    abi::encode_call("balanceOf(address)", &[abi::Value::Address(holder)])
}

/// Calldata for the DAO's `extensions(address)` getter.
#[must_use]
pub fn extensions_calldata(extension: Address) -> Vec<u8> {
    abi::encode_call("extensions(address)", &[abi::Value::Address(extension)])
}

/// Extract the result bytes from a JSON-RPC response body.
///
/// # Errors
///
/// Returns the node's error message, or a description of a malformed body.
pub fn parse_result_bytes(body: &serde_json::Value) -> Result<Vec<u8>, String> {
    if let Some(error) = body.get("error") {
        let message = error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("call reverted");
        return Err(message.to_owned());
    }
    let raw = body
        .get("result")
        .and_then(serde_json::Value::as_str)
        .ok_or("malformed rpc response")?;
    hex::decode(raw.trim_start_matches("0x")).map_err(|e| e.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn rpc_failed_message(status: u16) -> String {
    format!("rpc request failed: {status}")
}

/// Execute a read-only `eth_call` against `endpoint`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-OK status, or a node
/// error response.
pub async fn eth_call(endpoint: &str, to: Address, data: Vec<u8>) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = request_body("eth_call", eth_call_params(to, &data));
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(rpc_failed_message(resp.status()));
        }
        let value: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        parse_result_bytes(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, to, data);
        Err("not available on server".to_owned())
    }
}

/// Forced read of `holder`'s token balance at the DAO contract.
///
/// # Errors
///
/// Returns an error string on transport failure or a malformed result word.
pub async fn read_manager_balance(
    endpoint: &str,
    dao: Address,
    holder: Address,
) -> Result<U256, String> {
    let result = eth_call(endpoint, dao, balance_of_calldata(holder)).await?;
    abi::decode_uint(&result).ok_or_else(|| "malformed balance result".to_owned())
}

/// Fresh read of whether `extension` is enabled on the DAO.
///
/// # Errors
///
/// Returns an error string on transport failure or a malformed result word.
pub async fn read_extension_enabled(
    endpoint: &str,
    dao: Address,
    extension: Address,
) -> Result<bool, String> {
    let result = eth_call(endpoint, dao, extensions_calldata(extension)).await?;
    abi::decode_bool(&result).ok_or_else(|| "malformed extension result".to_owned())
}
