//! Shared governance domain model for the DAO project-management app.
//!
//! This crate owns everything the `client`, `server`, and `e2e` crates agree
//! on: the indexer data model, ABI calldata encoding, fixed-point token
//! amounts, deadline handling, form validation, the proposal payload builder,
//! and the submission-flow state machine. It is deliberately free of any UI
//! or transport dependency so the whole governance path is testable off-line.

pub mod abi;
pub mod datetime;
pub mod deployments;
pub mod flow;
pub mod model;
pub mod proposal;
pub mod units;
pub mod validate;
pub mod view;

pub use alloy_primitives::{Address, U256, address, hex, keccak256};
