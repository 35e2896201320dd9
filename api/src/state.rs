use std::sync::Arc;

use scoring::{DiffBuilder, ScoringEngine};

use crate::store::Store;

/// Shared application state handed to every request handler.
///
/// The scoring engine and diff builder are pure and stateless, so one
/// instance of each serves all requests concurrently.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
    engine: Arc<ScoringEngine>,
    diff: Arc<DiffBuilder>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::new()),
            engine: Arc::new(ScoringEngine::default()),
            diff: Arc::new(DiffBuilder::default()),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn diff(&self) -> &DiffBuilder {
        &self.diff
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
