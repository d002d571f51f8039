use governance::Address;

use super::*;

fn holder() -> Address {
    "0xf952a72F39c5Fa22a443200AbE7835128bCb7439"
        .parse()
        .unwrap()
}

#[test]
fn request_body_carries_the_jsonrpc_envelope() {
    let body = request_body("eth_call", serde_json::json!([]));
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["method"], "eth_call");
    assert!(body["params"].is_array());
}

#[test]
fn eth_call_params_hex_encode_the_calldata() {
    let params = eth_call_params(holder(), &[0x70, 0xa0]);
    assert_eq!(params[0]["data"], "0x70a0");
    assert_eq!(params[1], "latest");
    assert!(
        params[0]["to"]
            .as_str()
            .unwrap()
            .eq_ignore_ascii_case("0xf952a72f39c5fa22a443200abe7835128bcb7439")
    );
}

#[test]
fn balance_of_calldata_uses_the_erc20_selector() {
    let calldata = balance_of_calldata(holder());
    assert_eq!(&calldata[..4], &[0x70, 0xa0, 0x82, 0x31]);
    assert_eq!(calldata.len(), 36);
}

#[test]
fn extensions_calldata_embeds_the_extension_address() {
    let extension: Address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        .parse()
        .unwrap();
    let calldata = extensions_calldata(extension);
    assert_eq!(calldata.len(), 36);
    assert_eq!(&calldata[16..], extension.as_slice());
}

#[test]
fn parse_result_bytes_decodes_hex_results() {
    let body = serde_json::json!({ "jsonrpc": "2.0", "id": 1, "result": "0x00ff" });
    assert_eq!(parse_result_bytes(&body), Ok(vec![0x00, 0xff]));
}

#[test]
fn parse_result_bytes_surfaces_node_errors() {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": { "code": -32000, "message": "execution reverted" },
    });
    assert_eq!(
        parse_result_bytes(&body),
        Err("execution reverted".to_owned())
    );
}

#[test]
fn parse_result_bytes_rejects_malformed_bodies() {
    assert!(parse_result_bytes(&serde_json::json!({})).is_err());
    assert!(parse_result_bytes(&serde_json::json!({ "result": 5 })).is_err());
}

#[test]
fn rpc_failed_message_formats_status() {
    assert_eq!(rpc_failed_message(502), "rpc request failed: 502");
}
