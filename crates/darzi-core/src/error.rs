//! # Error Types
//!
//! Domain-specific error types for darzi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  darzi-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── TemplateError    - Template field schema / quick-entry failures   │
//! │                                                                         │
//! │  darzi-client errors (separate crate)                                  │
//! │  └── ClientError      - HTTP / REST API failures                       │
//! │                                                                         │
//! │  darzi-store errors (separate crate)                                   │
//! │  └── StoreError       - Store action failures (validation | network)   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → UI                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation and template failures are always recoverable: they are
//! reported per field or per operation and never reach the network layer.

use crate::money::Money;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations or domain logic failures.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Customer cannot be found in the loaded collection.
    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    /// Order cannot be found in the loaded collection.
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Template schema error (wraps TemplateError).
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before any request is sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., staff member assigned twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Payment amount exceeds the order's remaining balance.
    #[error("Amount cannot exceed remaining balance of {remaining}")]
    ExceedsRemaining { remaining: Money },
}

// =============================================================================
// Template Error
// =============================================================================

/// Template field schema and quick-entry errors.
///
/// The field engine never panics on user input; every failure mode is one
/// of these recoverable variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Field key already exists in the schema (case-sensitive match).
    #[error("Field key '{key}' already exists")]
    DuplicateField { key: String },

    /// Field key or label was blank.
    #[error("Both field key and label are required")]
    BlankField,

    /// Positional removal index is outside the field list.
    #[error("Field index {index} is out of range (schema has {len} fields)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A template must declare at least one measurement field.
    #[error("At least one measurement field is required")]
    EmptySchema,

    /// Quick entry produced a different number of values than the schema
    /// has fields.
    #[error("Quick entry expected {expected} values, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::CustomerNotFound(7).to_string(),
            "Customer not found: 7"
        );
        assert_eq!(CoreError::OrderNotFound(12).to_string(), "Order not found: 12");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::ExceedsRemaining {
            remaining: Money::from_major_minor(500, 0),
        };
        assert_eq!(
            err.to_string(),
            "Amount cannot exceed remaining balance of ৳500.00"
        );
    }

    #[test]
    fn test_count_mismatch_names_both_counts() {
        let err = TemplateError::CountMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Quick entry expected 3 values, got 2");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "phone".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
