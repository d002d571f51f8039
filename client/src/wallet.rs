//! Browser wallet bridge over the injected `window.ethereum` provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! All wallet interaction goes through the standard EIP-1193 `request`
//! method: `eth_requestAccounts` and `eth_chainId` for the session,
//! `eth_sendTransaction` for signature + broadcast. On the server these are
//! inert stubs; session state itself lives in `state::wallet`.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use governance::Address;
use governance::hex;
use governance::proposal::TransactionIntent;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Shorten an address for toolbar display, e.g. `0xf952…7439`.
#[must_use]
pub fn truncate_address(address: &Address) -> String {
    let full = address.to_string();
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

/// Parse a provider-reported hex chain id, e.g. `0x7a69` → 31337.
#[must_use]
pub fn parse_chain_id_hex(raw: &str) -> Option<u64> {
    let digits = raw.trim().strip_prefix("0x")?;
    u64::from_str_radix(digits, 16).ok()
}

/// `eth_sendTransaction` parameter object for an intent.
#[must_use]
pub fn transaction_params(from: Address, intent: &TransactionIntent) -> serde_json::Value {
    serde_json::json!({
        "from": from.to_string(),
        "to": intent.contract_address.to_string(),
        "data": format!("0x{}", hex::encode(intent.calldata())),
    })
}

/// Request wallet connection; resolves to the account and chain id.
///
/// # Errors
///
/// Returns the provider's error message (e.g. a user rejection) or a
/// description of a missing/malformed provider.
pub async fn connect() -> Result<(Address, u64), String> {
    #[cfg(feature = "hydrate")]
    {
        let accounts = request("eth_requestAccounts", None).await?;
        let accounts: js_sys::Array = accounts
            .dyn_into()
            .map_err(|_| "malformed accounts response".to_owned())?;
        let first = accounts
            .get(0)
            .as_string()
            .ok_or("wallet returned no accounts")?;
        let account: Address = first
            .parse()
            .map_err(|_| "wallet returned an invalid account".to_owned())?;

        let chain = request("eth_chainId", None).await?;
        let chain_id = chain
            .as_string()
            .as_deref()
            .and_then(parse_chain_id_hex)
            .ok_or("wallet returned an invalid chain id")?;

        Ok((account, chain_id))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign and broadcast an intent; resolves to the transaction hash.
///
/// # Errors
///
/// Returns the provider's error message — including the user declining the
/// signature — or a description of a malformed response.
pub async fn send_transaction(from: Address, intent: &TransactionIntent) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = js_sys::Array::new();
        let entry = serde_json::to_string(&transaction_params(from, intent))
            .map_err(|e| e.to_string())?;
        let entry = js_sys::JSON::parse(&entry).map_err(|e| js_error_message(&e))?;
        params.push(&entry);

        let hash = request("eth_sendTransaction", Some(params)).await?;
        hash.as_string()
            .ok_or_else(|| "wallet returned no transaction hash".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (from, intent);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn provider() -> Result<js_sys::Object, String> {
    let window = web_sys::window().ok_or("no window")?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|e| js_error_message(&e))?;
    if value.is_undefined() || value.is_null() {
        return Err("No wallet provider found. Install a browser wallet.".to_owned());
    }
    value
        .dyn_into()
        .map_err(|_| "wallet provider is not an object".to_owned())
}

#[cfg(feature = "hydrate")]
async fn request(method: &str, params: Option<js_sys::Array>) -> Result<JsValue, String> {
    let provider = provider()?;
    let request_fn: js_sys::Function =
        js_sys::Reflect::get(&provider, &JsValue::from_str("request"))
            .map_err(|e| js_error_message(&e))?
            .dyn_into()
            .map_err(|_| "wallet provider has no request method".to_owned())?;

    let args = js_sys::Object::new();
    js_sys::Reflect::set(
        &args,
        &JsValue::from_str("method"),
        &JsValue::from_str(method),
    )
    .map_err(|e| js_error_message(&e))?;
    if let Some(params) = params {
        js_sys::Reflect::set(&args, &JsValue::from_str("params"), &params)
            .map_err(|e| js_error_message(&e))?;
    }

    let promise: js_sys::Promise = request_fn
        .call1(&provider, &args)
        .map_err(|e| js_error_message(&e))?
        .dyn_into()
        .map_err(|_| "wallet request did not return a promise".to_owned())?;

    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| js_error_message(&e))
}

/// Extract the `message` an EIP-1193 provider error carries.
#[cfg(feature = "hydrate")]
fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "wallet request failed".to_owned())
}
