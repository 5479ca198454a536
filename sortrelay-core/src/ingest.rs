//! Ingestion Service: Validate, Classify, Stamp, Commit
//!
//! ## Overview
//!
//! The single write path into the store. A raw payload from the producer is
//! validated first; only a payload that passes gets classified, stamped with
//! the acceptance time, and committed. Rejection happens strictly before any
//! mutation, so the store can never hold a reading that failed validation or
//! whose category disagrees with its weight.
//!
//! ## Untrusted Input
//!
//! The producer is assumed untrusted. `RawReading` deserializes whatever the
//! device (or a spreadsheet-backed relay reduced to the same shape) sends:
//!
//! - missing fields are `None`, not deserialization failures, so they reject
//!   with a precise [`ValidationError`] instead of an opaque parse error
//! - the legacy firmware field names `warna`/`berat`/`kategori` are accepted
//!   as aliases
//! - a producer-supplied `category` is deserialized for wire compatibility
//!   but never trusted; the classifier always recomputes it
//! - unknown extra fields are ignored, never stored

use std::sync::Arc;

use log::warn;
use serde::Deserialize;

use crate::classify::classify;
use crate::errors::{ValidationError, ValidationResult};
use crate::reading::Reading;
use crate::store::StateStore;
use crate::time::TimeSource;

/// Untrusted raw payload as received from a producer
///
/// Every field is optional so that validation, not deserialization, decides
/// what is acceptable and reports which field was at fault.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReading {
    /// Color label; legacy firmware sends `warna`
    #[serde(default, alias = "warna")]
    pub color: Option<String>,

    /// Weight in grams; legacy firmware sends `berat`
    #[serde(default, alias = "berat", alias = "weight")]
    pub weight_grams: Option<f32>,

    /// Producer-side classification; accepted on the wire, never trusted
    #[serde(default, alias = "kategori")]
    pub category: Option<String>,

    /// Producer-side status flag; presentation data, ignored by the core
    #[serde(default)]
    pub status: Option<String>,
}

impl RawReading {
    /// Convenience constructor for direct (non-wire) producers
    pub fn new(color: impl Into<String>, weight_grams: f32) -> Self {
        Self {
            color: Some(color.into()),
            weight_grams: Some(weight_grams),
            category: None,
            status: None,
        }
    }
}

/// Validates raw payloads and commits accepted readings to the store
///
/// Owns nothing ambient: the store arrives as an `Arc` and the clock is
/// injected, so tests can pin both.
pub struct IngestionService<const N: usize = { crate::DEFAULT_HISTORY_CAPACITY }> {
    store: Arc<StateStore<N>>,
    clock: Box<dyn TimeSource>,
}

impl<const N: usize> IngestionService<N> {
    /// Create a service writing to `store`, stamping times from `clock`
    pub fn new(store: Arc<StateStore<N>>, clock: impl TimeSource + 'static) -> Self {
        Self {
            store,
            clock: Box::new(clock),
        }
    }

    /// Validate a raw payload; on success classify, stamp, commit
    ///
    /// Returns the committed reading. On rejection the store is untouched:
    /// current and history are exactly what they were before the call.
    pub fn ingest(&self, raw: RawReading) -> ValidationResult<Reading> {
        let reading = self.validate(raw).inspect_err(|e| {
            warn!("rejected payload: {e}");
        })?;

        self.store.commit(reading.clone());
        Ok(reading)
    }

    /// Checks ordered cheapest-first; no mutation on any path
    fn validate(&self, raw: RawReading) -> ValidationResult<Reading> {
        let color = raw.color.ok_or(ValidationError::MissingColor)?;
        if color.trim().is_empty() {
            return Err(ValidationError::EmptyColor);
        }

        let weight_grams = raw.weight_grams.ok_or(ValidationError::MissingWeight)?;
        if !weight_grams.is_finite() {
            return Err(ValidationError::InvalidWeight {
                value: weight_grams,
            });
        }
        if weight_grams < 0.0 {
            return Err(ValidationError::NegativeWeight {
                value: weight_grams,
            });
        }

        if let Some(supplied) = raw.category.as_deref() {
            // Untrusted; log the discard rather than persist a stale class
            warn!("ignoring producer-supplied category {supplied:?}");
        }

        Ok(Reading {
            color,
            weight_grams,
            category: classify(weight_grams),
            timestamp: self.clock.now(),
        })
    }
}
