//! Reading and Category Types
//!
//! ## Overview
//!
//! A [`Reading`] is one accepted sensor observation: the color label and
//! weight reported by the sorting device, the size [`Category`] derived from
//! that weight, and the timestamp at which the pipeline accepted it.
//!
//! ## Design Notes
//!
//! The producer is untrusted. Two fields are therefore never taken from the
//! wire:
//!
//! - `category` is always recomputed by [`classify`](crate::classify::classify).
//!   Some field deployments push a producer-side classification along with the
//!   raw weight; it is ignored so a stale or inconsistent value can never be
//!   persisted.
//! - `timestamp` is stamped at acceptance time by the ingestion service, which
//!   keeps history ordering monotonic under the store's single-writer lock
//!   regardless of producer clock drift.
//!
//! Color labels are free-form non-empty strings. The deployed devices report
//! "red"/"yellow"/"green" (or the Indonesian "Merah"/"Kuning"/"Hijau");
//! anything else is accepted and left to the display layer to map.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Derived size class for a reading
///
/// Always computed from the weight by the classifier, never supplied by the
/// producer. Wire names are lowercase (`"small"`, `"medium"`, `"large"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Category {
    /// Weight below the small/medium threshold
    Small = 0,
    /// Weight between the small/medium and medium/large thresholds
    Medium = 1,
    /// Weight at or above the medium/large threshold
    Large = 2,
}

impl Category {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Small => "small",
            Category::Medium => "medium",
            Category::Large => "large",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accepted sensor observation
///
/// Invariant: `category` is always consistent with `weight_grams` under the
/// active thresholds. Construction goes through the ingestion service, which
/// recomputes the category before the reading is ever stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Color label reported by the device (non-empty, otherwise free-form)
    pub color: String,
    /// Measured weight in grams (finite, non-negative)
    pub weight_grams: f32,
    /// Size class derived from `weight_grams`
    pub category: Category,
    /// Acceptance time in milliseconds since epoch
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names() {
        assert_eq!(Category::Small.name(), "small");
        assert_eq!(Category::Medium.name(), "medium");
        assert_eq!(Category::Large.name(), "large");
    }

    #[test]
    fn category_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Large).unwrap(), "\"large\"");
        let parsed: Category = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(parsed, Category::Small);
    }

    #[test]
    fn reading_serializes_camel_case() {
        let reading = Reading {
            color: "Merah".into(),
            weight_grams: 145.0,
            category: Category::Small,
            timestamp: 1000,
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["weightGrams"], 145.0);
        assert_eq!(json["category"], "small");
    }
}
