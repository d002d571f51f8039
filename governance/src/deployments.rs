//! Per-chain deployment and service endpoints.
//!
//! Contract addresses and indexer endpoints are deployment facts, not user
//! configuration, so they live in a table keyed by chain id. An unknown
//! chain yields `None` and the UI renders an unsupported-network notice
//! instead of half-working controls.

#[cfg(test)]
#[path = "deployments_test.rs"]
mod deployments_test;

use alloy_primitives::{Address, address};

/// Chain id of the local development harness (anvil's default).
pub const DEV_CHAIN_ID: u64 = 31337;

/// Project-management extension singleton for a chain.
#[must_use]
pub fn project_management_extension(chain_id: u64) -> Option<Address> {
    match chain_id {
        DEV_CHAIN_ID => Some(address!("5FbDB2315678afecb367f032d93F642f64180aa3")),
        _ => None,
    }
}

/// Indexer query endpoint for a chain.
#[must_use]
pub fn indexer_endpoint(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        DEV_CHAIN_ID => Some("/graph"),
        _ => None,
    }
}

/// JSON-RPC endpoint for read-only contract calls on a chain.
#[must_use]
pub fn rpc_endpoint(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        DEV_CHAIN_ID => Some("/rpc"),
        _ => None,
    }
}
