//! Error Types for Payload Validation
//!
//! ## Design Notes
//!
//! Validation errors are deliberately small and cheap to return: they sit on
//! the hot ingestion path and are surfaced to the producer as a structured
//! rejection, never as a crash. A rejected payload leaves the store untouched,
//! so no variant carries recovery state.
//!
//! Absence of a current reading is not represented here. Reading before the
//! first commit is modeled as an explicit `Option::None` on the query side,
//! which forces callers to branch on presence instead of handling a phantom
//! error case.

use thiserror::Error;

/// Result type for ingestion/validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a raw payload was rejected before reaching the store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Payload had no color field
    #[error("missing color")]
    MissingColor,

    /// Color was present but empty or all whitespace
    #[error("color is empty")]
    EmptyColor,

    /// Payload had no weight field
    #[error("missing weight")]
    MissingWeight,

    /// Weight was not a finite number (NaN or infinity)
    #[error("weight {value} is not a finite number")]
    InvalidWeight {
        /// The offending value as received
        value: f32,
    },

    /// Weight was negative
    #[error("weight {value} is negative")]
    NegativeWeight {
        /// The offending value as received
        value: f32,
    },
}
