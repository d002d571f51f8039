//! Development and e2e harness for the DAO project-management app.
//!
//! Serves the compiled client bundle plus fixture-backed stand-ins for the
//! two external services the client talks to: the chain JSON-RPC node
//! (`POST /rpc`, read-only `eth_call`) and the indexing service
//! (`POST /graph`). The fixtures mirror the end-to-end scenarios, so the
//! same process backs local development and the `e2e` driver crate.

pub mod fixtures;
pub mod graph;
pub mod routes;
pub mod rpc;
pub mod state;
