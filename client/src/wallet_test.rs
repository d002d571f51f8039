use governance::U256;
use governance::abi::Value;
use governance::proposal::{PROPOSE_SIGNATURE, TransactionIntent};

use super::*;

fn account() -> Address {
    "0xf952a72F39c5Fa22a443200AbE7835128bCb7439"
        .parse()
        .unwrap()
}

#[test]
fn truncate_address_keeps_both_ends() {
    assert_eq!(truncate_address(&account()), "0xf952…7439");
}

#[test]
fn parse_chain_id_hex_handles_provider_values() {
    assert_eq!(parse_chain_id_hex("0x7a69"), Some(31337));
    assert_eq!(parse_chain_id_hex("0x1"), Some(1));
    assert_eq!(parse_chain_id_hex(" 0x5 "), Some(5));
    assert_eq!(parse_chain_id_hex("7a69"), None);
    assert_eq!(parse_chain_id_hex("0xzz"), None);
}

#[test]
fn transaction_params_carry_from_to_and_calldata() {
    let intent = TransactionIntent {
        contract_address: "0xe237747055b12f4da323bc559ac8d5eb66aac2f7"
            .parse()
            .unwrap(),
        chain_id: 31337,
        function_name: "propose".to_owned(),
        signature: PROPOSE_SIGNATURE.to_owned(),
        args: vec![
            Value::Uint(U256::from(9u8)),
            Value::String("text".to_owned()),
            Value::Array(vec![]),
            Value::Array(vec![]),
            Value::Array(vec![]),
        ],
    };

    let params = transaction_params(account(), &intent);
    assert!(
        params["from"]
            .as_str()
            .unwrap()
            .eq_ignore_ascii_case("0xf952a72f39c5fa22a443200abe7835128bcb7439")
    );
    assert!(
        params["to"]
            .as_str()
            .unwrap()
            .eq_ignore_ascii_case("0xe237747055b12f4da323bc559ac8d5eb66aac2f7")
    );
    let data = params["data"].as_str().unwrap();
    let selector = governance::abi::selector(PROPOSE_SIGNATURE);
    assert!(data.starts_with(&format!("0x{}", governance::hex::encode(selector))));
}
