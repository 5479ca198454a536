//! Shared State Store for the Current Reading and Its History
//!
//! ## Overview
//!
//! The store is the only shared mutable resource in the pipeline. It owns two
//! things and nothing else holds a mutable reference to either:
//!
//! - the current reading (or absence, before the first commit)
//! - the bounded newest-first [`HistoryBuffer`]
//!
//! ## Atomicity
//!
//! Both live inside one `RwLock`, so a commit replaces the current reading
//! and appends to history under a single write lock. A reader can never
//! observe a torn update — current swapped but history missing the entry, or
//! the reverse. Reads take the shared lock and may run concurrently with each
//! other; they only wait out an in-progress commit.
//!
//! All operations are bounded by the history capacity `N`, never by request
//! volume, and none of them fail: eviction at capacity is routine and
//! reading before the first commit is an explicit `None`.

use std::sync::RwLock;

use log::debug;

use crate::history::{HistoryBuffer, DEFAULT_HISTORY_CAPACITY};
use crate::reading::Reading;

/// Mutually consistent point-in-time view of the store
///
/// `current` and `history` are captured under one read lock, so the pair
/// always agrees: whenever `current` is `Some`, it equals `history[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Latest committed reading, or `None` before the first commit
    pub current: Option<Reading>,
    /// Newest-first history at capture time
    pub history: Vec<Reading>,
}

/// Inner state guarded by one lock so commit-and-append is indivisible
#[derive(Debug)]
struct State<const N: usize> {
    current: Option<Reading>,
    history: HistoryBuffer<N>,
}

/// Owner of the current reading and history buffer
///
/// Constructed once and passed to the ingestion and query services by
/// reference (`Arc`), never accessed through a process-wide global.
#[derive(Debug)]
pub struct StateStore<const N: usize = DEFAULT_HISTORY_CAPACITY> {
    state: RwLock<State<N>>,
}

impl<const N: usize> StateStore<N> {
    /// Create an empty store: no current reading, empty history
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                current: None,
                history: HistoryBuffer::new(),
            }),
        }
    }

    /// Atomically replace the current reading and append it to history
    ///
    /// The oldest history entry is evicted when capacity is exceeded. Never
    /// fails; the poisoned-lock case cannot arise because no code path
    /// panics while holding the lock.
    pub fn commit(&self, reading: Reading) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        debug!(
            "commit: color={} weight={}g category={}",
            reading.color, reading.weight_grams, reading.category
        );

        state.history.push(reading.clone());
        state.current = Some(reading);
    }

    /// Latest committed reading, or `None` before the first commit
    pub fn current(&self) -> Option<Reading> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.current.clone()
    }

    /// Newest-first snapshot of the history buffer
    ///
    /// The returned vector is an owned copy; later commits do not mutate it.
    pub fn history(&self) -> Vec<Reading> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.history.snapshot()
    }

    /// Current reading and history captured under one read lock
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Snapshot {
            current: state.current.clone(),
            history: state.history.snapshot(),
        }
    }
}

impl<const N: usize> Default for StateStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
