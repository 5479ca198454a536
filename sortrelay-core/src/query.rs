//! Query service: the read side of the pipeline
//!
//! Stateless composition over the store's read operations for polling
//! clients. Applies no classification and mutates nothing; safe to call
//! concurrently and arbitrarily often — the dashboard's 3–5 second poll
//! timer lives entirely on the client side, no minimum interval is imposed
//! here.

use std::sync::Arc;

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::reading::Reading;
use crate::store::{Snapshot, StateStore};

/// Read-only view over a shared [`StateStore`]
#[derive(Clone)]
pub struct QueryService<const N: usize = DEFAULT_HISTORY_CAPACITY> {
    store: Arc<StateStore<N>>,
}

impl<const N: usize> QueryService<N> {
    /// Create a view over `store`
    pub fn new(store: Arc<StateStore<N>>) -> Self {
        Self { store }
    }

    /// Latest committed reading, or `None` before the first commit
    pub fn current(&self) -> Option<Reading> {
        self.store.current()
    }

    /// Newest-first history snapshot
    pub fn history(&self) -> Vec<Reading> {
        self.store.history()
    }

    /// Current and history as one mutually consistent capture
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }
}
