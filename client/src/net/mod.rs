//! Networking modules for the chain-read and indexer-query clients.
//!
//! SYSTEM CONTEXT
//! ==============
//! `rpc` executes read-only contract calls over JSON-RPC and `graph` runs
//! indexed queries against the per-chain indexer endpoint. Both are real
//! HTTP on the browser (hydrate) and inert stubs during SSR.

pub mod graph;
pub mod rpc;
