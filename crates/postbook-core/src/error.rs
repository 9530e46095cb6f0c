//! Domain-level error types.

use thiserror::Error;

/// Domain errors - the failures a record store caller can observe.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] RepoError),
}

/// Repository-level errors, raised by storage adapters.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A stored row no longer satisfies the entity invariants.
    #[error("Corrupt row {id}: {reason}")]
    Corrupt { id: i64, reason: String },
}
