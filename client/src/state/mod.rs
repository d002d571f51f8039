//! Reactive application state shared through Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `wallet` holds the single wallet/account/network session, mutated only by
//! user-initiated connect/disconnect events. `reads` models asynchronous
//! chain reads as explicit three-state values with refetch cancellation.

pub mod reads;
pub mod wallet;
