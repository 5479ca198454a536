//! Weight-Based Size Classification
//!
//! ## Overview
//!
//! Maps a weight in grams to a size [`Category`] using two fixed thresholds.
//! Half-open intervals, boundaries inclusive on the lower bound:
//!
//! ```text
//! weight:   0 ·········· 200 ·········· 400 ··········→
//! category: [   Small    )[   Medium    )[   Large
//! ```
//!
//! So 200 g is Medium and 400 g is Large, never the class below.
//!
//! ## Why One Function?
//!
//! The original deployment re-derived the category in several presentation
//! copies, which is how producer-side and display-side classifications
//! drifted apart. Classification lives here once; every reading that reaches
//! the store has passed through this function, and display badge mapping is
//! a separate concern outside the core.
//!
//! Pure and total over finite non-negative input. Negative or non-finite
//! weight is a validation error caught by the ingestion service before
//! classification is ever reached.

use crate::reading::Category;

/// Weights below this are Small, at or above it Medium (grams)
pub const SMALL_MAX_GRAMS: f32 = 200.0;

/// Weights below this (and at least [`SMALL_MAX_GRAMS`]) are Medium,
/// at or above it Large (grams)
pub const MEDIUM_MAX_GRAMS: f32 = 400.0;

/// Classify a weight into its size category
///
/// Deterministic: identical input always yields the identical category.
///
/// ```
/// use sortrelay_core::{classify, Category};
///
/// assert_eq!(classify(145.0), Category::Small);
/// assert_eq!(classify(200.0), Category::Medium);
/// assert_eq!(classify(450.0), Category::Large);
/// ```
pub fn classify(weight_grams: f32) -> Category {
    if weight_grams < SMALL_MAX_GRAMS {
        Category::Small
    } else if weight_grams < MEDIUM_MAX_GRAMS {
        Category::Medium
    } else {
        Category::Large
    }
}
