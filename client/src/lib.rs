//! # client
//!
//! Leptos + WASM frontend for the DAO project-management application.
//!
//! This crate contains pages, components, application state, the wallet
//! bridge, and the chain-read / indexer query clients. All governance
//! semantics (validation, payload building, the submission flow) live in the
//! `governance` crate; this crate renders and drives them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod wallet;

/// WASM entry point: hydrate the application into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
