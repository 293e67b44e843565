//! Unified error types for the migration pipeline.
//!
//! Business failures (missing material, validation, conflicts) are ordinary
//! variants here. The single-item migration turns them into failed
//! [`MigrationResult`](crate::core::migration::MigrationResult)s, so only
//! setup problems (config, connection, bad batch size) ever reach a caller.

use thiserror::Error;
use uuid::Uuid;

/// All errors produced by this crate
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database error surfaced by `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The legacy material does not exist
    #[error("Material with ID {id} not found")]
    MaterialNotFound {
        /// Requested material id
        id: Uuid,
    },

    /// The material violates one or more required-field rules
    #[error("Validation failed: {}", .violations.join("; "))]
    Validation {
        /// Violated rule messages, in rule order
        violations: Vec<String>,
    },

    /// A variant with the same name already exists under the base product
    #[error("Product variant '{name}' already exists for base product '{base_product}'")]
    VariantConflict {
        /// Variant name
        name: String,
        /// Owning base product name
        base_product: String,
    },

    /// No unit of measure could be found or created for the raw unit type
    #[error("Failed to resolve unit of measure for unit type '{unit_type}'")]
    UnitResolution {
        /// Raw unit type string from the material
        unit_type: String,
    },

    /// Bulk migration was asked to run with a zero batch size
    #[error("Batch size must be greater than zero (got {batch_size})")]
    InvalidBatchSize {
        /// The rejected batch size
        batch_size: usize,
    },

    /// A bulk run finished with failed materials
    #[error("{failed} of {attempted} attempted materials failed to migrate")]
    IncompleteMigration {
        /// Failed materials
        failed: usize,
        /// Attempted materials
        attempted: usize,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_rules() {
        let err = Error::Validation {
            violations: vec![
                "Unit type is required".to_string(),
                "Stock quantity cannot be negative".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Validation failed: Unit type is required; Stock quantity cannot be negative"
        );
    }

    #[test]
    fn test_conflict_message_mentions_already_exists() {
        let err = Error::VariantConflict {
            name: "Steel Pipe".to_string(),
            base_product: "Steel Pipe".to_string(),
        };
        assert!(err.to_string().contains("already exists"));
    }
}
