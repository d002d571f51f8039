//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! fixture set is immutable for the process lifetime, so sharing is a plain
//! `Arc` with no locking.

use std::path::PathBuf;
use std::sync::Arc;

use crate::fixtures::Fixtures;

/// Shared application state, cloned per handler invocation.
#[derive(Clone)]
pub struct AppState {
    /// Canned chain and indexer state.
    pub fixtures: Arc<Fixtures>,
    /// Directory holding the compiled client bundle.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Build state around a fixture set.
    #[must_use]
    pub fn new(fixtures: Fixtures, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
            static_dir: static_dir.into(),
        }
    }
}
