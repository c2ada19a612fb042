//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::ports::{PersistenceError, TrackingError};

/// Domain errors - raised by the record store and surfaced unchanged by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Unknown reference: {entity_type} with id {id} does not exist")]
    Reference { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity_type} with id {id} is still referenced by {dependents} post(s)")]
    InUse {
        entity_type: &'static str,
        id: Uuid,
        dependents: usize,
    },
}

impl DomainError {
    /// Stable machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "not_found",
            DomainError::Reference { .. } => "reference",
            DomainError::Validation(_) => "validation",
            DomainError::InUse { .. } => "in_use",
        }
    }

    pub(crate) fn not_found(entity_type: &'static str, id: Uuid) -> Self {
        DomainError::NotFound { entity_type, id }
    }

    pub(crate) fn reference(entity_type: &'static str, id: Uuid) -> Self {
        DomainError::Reference { entity_type, id }
    }
}

/// Session-level errors - collaborator failures while opening, saving or refreshing.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),

    #[error("Stored snapshot is inconsistent: {0}")]
    Snapshot(#[from] DomainError),
}
