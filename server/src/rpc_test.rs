use governance::deployments;

use crate::fixtures::{e2e_account, other_manager, pmtest_dao, pmtest2_dao};

use super::*;

fn call_body(to: Address, calldata: Vec<u8>) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "eth_call",
        "params": [
            { "to": to.to_string(), "data": format!("0x{}", hex::encode(calldata)) },
            "latest",
        ],
    })
}

fn result_word(response: &serde_json::Value) -> U256 {
    let raw = response["result"].as_str().unwrap();
    let bytes = hex::decode(raw.trim_start_matches("0x")).unwrap();
    abi::decode_uint(&bytes).unwrap()
}

#[test]
fn chain_id_is_reported_in_hex() {
    let response = handle(&Fixtures::dev(), &serde_json::json!({
        "jsonrpc": "2.0", "id": 1, "method": "eth_chainId", "params": [],
    }));
    assert_eq!(response["result"], "0x7a69");
    assert_eq!(response["id"], 1);
}

#[test]
fn balance_of_returns_fixture_balances() {
    let fixtures = Fixtures::dev();
    let calldata = abi::encode_call(
        "balanceOf(address)",
        &[abi::Value::Address(e2e_account())],
    );
    let response = handle(&fixtures, &call_body(pmtest_dao(), calldata));
    assert_eq!(result_word(&response), fixtures.balance_of(pmtest_dao(), e2e_account()));

    let calldata = abi::encode_call(
        "balanceOf(address)",
        &[abi::Value::Address(other_manager())],
    );
    let response = handle(&fixtures, &call_body(pmtest_dao(), calldata));
    assert!(result_word(&response).is_zero());
}

#[test]
fn extensions_returns_the_enablement_flag() {
    let fixtures = Fixtures::dev();
    let extension = deployments::project_management_extension(fixtures.chain_id).unwrap();
    let calldata =
        abi::encode_call("extensions(address)", &[abi::Value::Address(extension)]);

    let enabled = handle(&fixtures, &call_body(pmtest_dao(), calldata.clone()));
    assert_eq!(result_word(&enabled), U256::from(1u8));

    let disabled = handle(&fixtures, &call_body(pmtest2_dao(), calldata));
    assert_eq!(result_word(&disabled), U256::ZERO);
}

#[test]
fn unknown_contracts_and_selectors_revert() {
    let fixtures = Fixtures::dev();

    let calldata = abi::encode_call(
        "balanceOf(address)",
        &[abi::Value::Address(e2e_account())],
    );
    let response = handle(&fixtures, &call_body(Address::ZERO, calldata));
    assert_eq!(response["error"]["message"], "execution reverted");

    let response = handle(
        &fixtures,
        &call_body(pmtest_dao(), abi::encode_call("totalSupply()", &[])),
    );
    assert_eq!(response["error"]["message"], "execution reverted");
}

#[test]
fn unsupported_methods_return_a_json_rpc_error() {
    let response = handle(&Fixtures::dev(), &serde_json::json!({
        "jsonrpc": "2.0", "id": 9, "method": "eth_sendRawTransaction", "params": [],
    }));
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("method not supported"));
    assert_eq!(response["id"], 9);
}
