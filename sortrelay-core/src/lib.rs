//! Core pipeline for sortrelay
//!
//! Accepts raw sensor payloads (object color + weight from an external
//! sorting device), validates and classifies them, and maintains the
//! shared state that monitoring clients poll:
//!
//! - exactly one "current" reading, replaced atomically per commit
//! - a bounded, newest-first history of recent readings
//!
//! The store serializes writers against readers, so a poll never observes
//! the current reading updated without its history entry (or vice versa).
//!
//! ```
//! use sortrelay_core::{IngestionService, QueryService, RawReading, StateStore};
//! use sortrelay_core::time::WallClock;
//! use std::sync::Arc;
//!
//! let store: Arc<StateStore> = Arc::new(StateStore::new());
//! let ingest = IngestionService::new(store.clone(), WallClock);
//! let query = QueryService::new(store);
//!
//! ingest.ingest(RawReading::new("Merah", 145.0)).unwrap();
//! let snapshot = query.snapshot();
//! assert_eq!(snapshot.current.unwrap().weight_grams, 145.0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod errors;
pub mod history;
pub mod ingest;
pub mod query;
pub mod reading;
pub mod store;
pub mod time;

// Public API
pub use classify::classify;
pub use errors::{ValidationError, ValidationResult};
pub use history::{HistoryBuffer, DEFAULT_HISTORY_CAPACITY};
pub use ingest::{IngestionService, RawReading};
pub use query::QueryService;
pub use reading::{Category, Reading};
pub use store::{Snapshot, StateStore};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
