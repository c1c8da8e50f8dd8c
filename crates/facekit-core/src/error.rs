//! Error handling for FaceKit
//!
//! Every failure in the planning engine is a synchronous input-validation
//! failure. There is no transient failure mode, so none of these are
//! retryable.

use thiserror::Error;

/// Planning and emission error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A geometry or rate unit string was not recognized
    #[error("Unsupported {kind} unit: {value}")]
    UnsupportedUnit {
        /// Which unit field was being parsed ("geometry" or "rate").
        kind: &'static str,
        /// The unrecognized input.
        value: String,
    },

    /// A quantity was zero, negative or not finite, or a ratio of two
    /// quantities asked for more levels or passes than a program may hold
    #[error("Invalid dimension '{name}': {value}")]
    InvalidDimension {
        /// The parameter name, or `a/b` for a ratio.
        name: String,
        /// The offending value (mm, mm/min, or the ratio itself).
        value: f64,
    },

    /// A depth or pass plan contained no entries
    #[error("Empty toolpath plan: {0}")]
    EmptyPlan(String),
}

impl Error {
    /// Create an invalid-dimension error for the named parameter
    pub fn invalid_dimension(name: impl Into<String>, value: f64) -> Self {
        Error::InvalidDimension {
            name: name.into(),
            value,
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Reject values that are not strictly positive and finite
pub fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid_dimension(name, value))
    }
}
