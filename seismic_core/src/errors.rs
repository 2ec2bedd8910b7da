//! # Error Types
//!
//! Structured error types for seismic_core. Every failure the engine can
//! produce is a value the caller matches on, never a panic: failures are
//! deterministic functions of the input, so the remedy is always a corrected
//! input, not a retry.
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::errors::{CalcError, CalcResult};
//!
//! fn validate_reduction_factor(r_x: f64) -> CalcResult<()> {
//!     if r_x == 0.0 {
//!         return Err(CalcError::division_by_zero("r_x", r_x.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for seismic_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides enough context for a caller to build a useful
/// user-facing message. On any error the caller should clear previously
/// rendered results rather than show them next to the failure.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required field is absent, non-numeric, or zero where zero means
    /// "not yet provided"
    #[error("Missing or invalid input for '{field}': {value} - {reason}")]
    MissingOrInvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A denominator or multiplier in the base shear equation is zero or
    /// non-finite
    #[error("Division by zero or missing value: '{field}' = {value}")]
    DivisionByZeroOrMissing { field: String, value: String },

    /// Story heights and weights sum to a zero weighted height, so the
    /// distribution ratios are undefined
    #[error("Degenerate story data: {reason}")]
    DegenerateStoryData { reason: String },

    /// Design code selector outside the supported codes
    #[error("Unsupported design code: '{code}'")]
    UnsupportedCode { code: String },
}

impl CalcError {
    /// Create a MissingOrInvalidInput error
    pub fn missing_or_invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::MissingOrInvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZeroOrMissing error
    pub fn division_by_zero(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::DivisionByZeroOrMissing {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a DegenerateStoryData error
    pub fn degenerate_story_data(reason: impl Into<String>) -> Self {
        CalcError::DegenerateStoryData {
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedCode error
    pub fn unsupported_code(code: impl Into<String>) -> Self {
        CalcError::UnsupportedCode { code: code.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingOrInvalidInput { .. } => "MISSING_OR_INVALID_INPUT",
            CalcError::DivisionByZeroOrMissing { .. } => "DIVISION_BY_ZERO_OR_MISSING",
            CalcError::DegenerateStoryData { .. } => "DEGENERATE_STORY_DATA",
            CalcError::UnsupportedCode { .. } => "UNSUPPORTED_CODE",
        }
    }

    /// Name of the offending input field, where one exists
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::MissingOrInvalidInput { field, .. } => Some(field),
            CalcError::DivisionByZeroOrMissing { field, .. } => Some(field),
            CalcError::DegenerateStoryData { .. } => None,
            CalcError::UnsupportedCode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::missing_or_invalid("ss", "0", "zero reads as not yet provided");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_tagged_representation() {
        let error = CalcError::degenerate_story_data("weighted height total is zero");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"DegenerateStoryData\""));
        assert!(json.contains("\"details\""));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::division_by_zero("r_x", "0").error_code(),
            "DIVISION_BY_ZERO_OR_MISSING"
        );
        assert_eq!(
            CalcError::unsupported_code("IBC").error_code(),
            "UNSUPPORTED_CODE"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::division_by_zero("total_weight_kn", "0");
        assert_eq!(
            error.to_string(),
            "Division by zero or missing value: 'total_weight_kn' = 0"
        );
    }

    #[test]
    fn test_error_field() {
        assert_eq!(
            CalcError::missing_or_invalid("ag", "NaN", "not finite").field(),
            Some("ag")
        );
        assert_eq!(CalcError::unsupported_code("IBC").field(), None);
    }
}
