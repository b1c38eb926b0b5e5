use thiserror::Error;

use crate::domain::models::UserId;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid date format, use YYYY-MM-DD: {0}")]
    InvalidFormat(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid user ID: {0}")]
    InvalidId(String),
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error(transparent)]
    Store(anyhow::Error),
}

impl DomainError {
    /// Client faults are reported back verbatim; store faults are not.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, DomainError::Store(_))
    }
}

/// Failures surfaced by a [`UserRepository`](crate::domain::repositories::UserRepository).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<StoreError> for DomainError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => DomainError::NotFound(id),
            StoreError::Backend(err) => DomainError::Store(err),
        }
    }
}
