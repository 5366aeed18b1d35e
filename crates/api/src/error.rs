use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sca_core::error::DomainError;
use sca_service::ServiceError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ServiceError`] for domain and database failures and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the domain service layer.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Service(ServiceError::Domain(domain)) => classify_domain_error(domain),
            AppError::Service(ServiceError::Database(err)) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map each domain failure to an HTTP status and stable error code.
///
/// The domain enum is closed, so this match is exhaustive: adding a
/// failure kind forces a mapping decision here.
fn classify_domain_error(err: &DomainError) -> (StatusCode, &'static str, String) {
    let message = err.to_string();
    match err {
        DomainError::InvalidBreed { .. } => (StatusCode::BAD_REQUEST, "INVALID_BREED", message),
        DomainError::TargetsCountOutOfRange { .. } => (
            StatusCode::BAD_REQUEST,
            "TARGETS_COUNT_OUT_OF_RANGE",
            message,
        ),
        DomainError::TargetNameNotUniqueInMission { .. } => (
            StatusCode::BAD_REQUEST,
            "TARGET_NAME_NOT_UNIQUE_IN_MISSION",
            message,
        ),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message),

        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
        DomainError::CatNotFound { .. } => (StatusCode::NOT_FOUND, "CAT_NOT_FOUND", message),

        DomainError::CatHasActiveMission { .. } => {
            (StatusCode::CONFLICT, "CAT_HAS_ACTIVE_MISSION", message)
        }
        DomainError::CatAlreadyHasActiveMission { .. } => (
            StatusCode::CONFLICT,
            "CAT_ALREADY_HAS_ACTIVE_MISSION",
            message,
        ),
        DomainError::MissionAssignedCannotDelete { .. } => (
            StatusCode::CONFLICT,
            "MISSION_ASSIGNED_CANNOT_DELETE",
            message,
        ),
        DomainError::MissionAlreadyComplete { .. } => {
            (StatusCode::CONFLICT, "MISSION_ALREADY_COMPLETE", message)
        }

        DomainError::NotesFrozen { .. } => (StatusCode::FORBIDDEN, "NOTES_FROZEN", message),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
