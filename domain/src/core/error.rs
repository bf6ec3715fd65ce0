//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No specialists configured for the panel")]
    NoSpecialists,

    #[error("Task name cannot be empty")]
    EmptyTaskName,

    #[error("Duplicate task name: {0}")]
    DuplicateTaskName(String),

    #[error("Required name '{0}' is not part of the submitted roster")]
    UnknownRequiredName(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
