//! # Error Types
//!
//! Domain-specific error types for masa-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (this file)  - input rejected before any I/O          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  DbError (masa-db)            - persistence failures                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ApiError (masa-api)          - localized {"error": ...} JSON body     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These occur when a request field fails validation or explicit numeric
/// parsing, before any business logic or storage call runs. The HTTP layer
/// translates them to localized user-facing messages.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value is not one of the six recognized varieties.
    #[error("unknown variety: '{value}'")]
    UnknownVariety { value: String },

    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// Field could not be parsed as a number.
    ///
    /// Covers the malformed-input cases the original system let through as
    /// NaN: non-numeric strings, `"NaN"`, infinities.
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Numeric field must be a whole number.
    #[error("{field} must be a whole number")]
    NotAnInteger { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A zero value has no effect and is rejected (increments).
    #[error("{field} must not be zero")]
    Zero { field: String },

    /// Value is outside the representable centavo range.
    #[error("{field} is out of range")]
    OutOfRange { field: String },

    /// Text field exceeds the allowed length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Malformed calendar date (`YYYY-MM-DD` or RFC 3339 expected).
    #[error("invalid date: '{value}'")]
    InvalidDate { value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::UnknownVariety {
            value: "Mole".to_string(),
        };
        assert_eq!(err.to_string(), "unknown variety: 'Mole'");

        let err = ValidationError::Required {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity is required");

        let err = ValidationError::InvalidNumber {
            field: "price".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a valid number: 'abc'");
    }
}
