//! Contract ABI value model and calldata codec.
//!
//! DESIGN
//! ======
//! The app only ever speaks to two published contract interfaces (the DAO
//! `propose` entrypoint and two read getters), so this module carries a
//! minimal head/tail encoder over `alloy-primitives` words instead of a full
//! ABI toolkit. Selectors are derived from signatures at call time rather
//! than hardcoded.

#[cfg(test)]
#[path = "abi_test.rs"]
mod abi_test;

use alloy_primitives::{Address, U256, keccak256};

/// A single ABI-encodable argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// `uint8`..`uint256`, always encoded as one big-endian word.
    Uint(U256),
    /// `address`, left-padded to one word.
    Address(Address),
    /// `string`, dynamic.
    String(String),
    /// `bytes`, dynamic.
    Bytes(Vec<u8>),
    /// `T[]` of any encodable element type, dynamic.
    Array(Vec<Value>),
}

/// Encode a value sequence as an ABI tuple (head words followed by tails).
#[must_use]
pub fn encode(values: &[Value]) -> Vec<u8> {
    let head_len = values.len() * 32;
    let mut head = Vec::with_capacity(head_len);
    let mut tail: Vec<u8> = Vec::new();

    for value in values {
        match value {
            Value::Uint(v) => head.extend_from_slice(&v.to_be_bytes::<32>()),
            Value::Address(a) => {
                let mut word = [0u8; 32];
                word[12..].copy_from_slice(a.as_slice());
                head.extend_from_slice(&word);
            }
            Value::String(s) => {
                push_offset(&mut head, head_len + tail.len());
                tail.extend_from_slice(&encode_bytes(s.as_bytes()));
            }
            Value::Bytes(b) => {
                push_offset(&mut head, head_len + tail.len());
                tail.extend_from_slice(&encode_bytes(b));
            }
            Value::Array(items) => {
                push_offset(&mut head, head_len + tail.len());
                tail.extend_from_slice(&U256::from(items.len()).to_be_bytes::<32>());
                tail.extend_from_slice(&encode(items));
            }
        }
    }

    head.extend_from_slice(&tail);
    head
}

/// First four bytes of `keccak256(signature)`.
#[must_use]
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Full calldata for a function call: selector plus encoded arguments.
#[must_use]
pub fn encode_call(signature: &str, args: &[Value]) -> Vec<u8> {
    let mut out = selector(signature).to_vec();
    out.extend_from_slice(&encode(args));
    out
}

/// Read the `index`-th word-sized argument of calldata as an address.
///
/// Returns `None` when the calldata is too short or the padding bytes are
/// not zero (malformed for an `address` slot).
#[must_use]
pub fn decode_address_arg(calldata: &[u8], index: usize) -> Option<Address> {
    let start = 4 + (index * 32);
    let word = calldata.get(start..start + 32)?;
    if word[..12].iter().any(|b| *b != 0) {
        return None;
    }
    Some(Address::from_slice(&word[12..]))
}

/// Decode a single-word `uint256` return value.
#[must_use]
pub fn decode_uint(data: &[u8]) -> Option<U256> {
    let word = data.get(..32)?;
    Some(U256::from_be_slice(word))
}

/// Decode a single-word `bool` return value (any non-zero word is true).
#[must_use]
pub fn decode_bool(data: &[u8]) -> Option<bool> {
    decode_uint(data).map(|v| !v.is_zero())
}

fn push_offset(head: &mut Vec<u8>, offset: usize) {
    head.extend_from_slice(&U256::from(offset).to_be_bytes::<32>());
}

fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = U256::from(data.len()).to_be_bytes::<32>().to_vec();
    out.extend_from_slice(data);
    let remainder = data.len() % 32;
    if remainder != 0 {
        out.extend(std::iter::repeat_n(0u8, 32 - remainder));
    }
    out
}
