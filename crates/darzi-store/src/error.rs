//! # Store Error Types

use indexmap::IndexMap;
use thiserror::Error;

use darzi_client::ClientError;
use darzi_core::{CoreError, TemplateError, ValidationError};

/// Errors surfaced by store mutations.
///
/// Validation failures are caught before any network call; client
/// errors come back from the backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The input failed local validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced entity is not in the loaded collections; nothing
    /// was sent.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The field schema rejected the input; nothing was sent.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A measurement is missing required values, keyed by field key
    /// with a per-field message.
    #[error("{} measurement field(s) missing or invalid", missing.len())]
    IncompleteMeasurement {
        missing: IndexMap<String, String>,
    },

    /// The backend call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_measurement_counts_fields() {
        let mut missing = IndexMap::new();
        missing.insert("chest".to_string(), "Chest is required".to_string());
        missing.insert("waist".to_string(), "Waist is required".to_string());
        let err = StoreError::IncompleteMeasurement { missing };
        assert_eq!(err.to_string(), "2 measurement field(s) missing or invalid");
    }

    #[test]
    fn validation_error_passes_through() {
        let err = StoreError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert!(err.to_string().contains("name"));
    }
}
