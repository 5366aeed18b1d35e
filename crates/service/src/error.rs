use sca_core::error::DomainError;

/// Error type for domain service operations.
///
/// Keeps domain rule violations (recoverable, caller-visible, mappable to
/// specific responses) distinct from storage-level failures (generic
/// infrastructure errors).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain rule violation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for service return values.
pub type ServiceResult<T> = Result<T, ServiceError>;
