//! Fixture-backed JSON-RPC endpoint.
//!
//! Supports exactly what the client's chain-read path uses: `eth_chainId`
//! and read-only `eth_call` against the two published getters
//! (`balanceOf(address)`, `extensions(address)`). Anything else gets a
//! JSON-RPC error object, never a transport failure.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use governance::{Address, U256, abi, hex};

use crate::fixtures::Fixtures;

/// Handle one JSON-RPC request body.
#[must_use]
pub fn handle(fixtures: &Fixtures, request: &serde_json::Value) -> serde_json::Value {
    let id = request.get("id").cloned().unwrap_or(serde_json::Value::Null);
    let method = request
        .get("method")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();

    match method {
        "eth_chainId" => ok(id, format!("0x{:x}", fixtures.chain_id)),
        "eth_call" => match eth_call(fixtures, request) {
            Ok(result) => ok(id, result),
            Err(message) => error(id, &message),
        },
        _ => error(id, &format!("method not supported: {method}")),
    }
}

fn eth_call(fixtures: &Fixtures, request: &serde_json::Value) -> Result<String, String> {
    let call = request
        .get("params")
        .and_then(|params| params.get(0))
        .ok_or("missing call object")?;
    let to: Address = call
        .get("to")
        .and_then(serde_json::Value::as_str)
        .ok_or("missing `to`")?
        .parse()
        .map_err(|_| "invalid `to` address".to_owned())?;
    let data = call
        .get("data")
        .and_then(serde_json::Value::as_str)
        .ok_or("missing `data`")?;
    let calldata = hex::decode(data.trim_start_matches("0x")).map_err(|e| e.to_string())?;

    dispatch(fixtures, to, &calldata)
}

fn dispatch(fixtures: &Fixtures, to: Address, calldata: &[u8]) -> Result<String, String> {
    if fixtures.dao(to).is_none() {
        return Err("execution reverted".to_owned());
    }
    let selector = calldata.get(..4).ok_or("calldata too short")?;

    if selector == abi::selector("balanceOf(address)") {
        let holder = abi::decode_address_arg(calldata, 0).ok_or("malformed balanceOf call")?;
        return Ok(word(fixtures.balance_of(to, holder)));
    }
    if selector == abi::selector("extensions(address)") {
        let extension =
            abi::decode_address_arg(calldata, 0).ok_or("malformed extensions call")?;
        let enabled = fixtures.extension_enabled(to, extension);
        return Ok(word(U256::from(u8::from(enabled))));
    }

    Err("execution reverted".to_owned())
}

fn word(value: U256) -> String {
    format!("0x{}", hex::encode(value.to_be_bytes::<32>()))
}

fn ok(id: serde_json::Value, result: String) -> serde_json::Value {
    serde_json::json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn error(id: serde_json::Value, message: &str) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": -32000, "message": message },
    })
}
