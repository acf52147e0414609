pub mod authors;
pub mod error;
pub mod health;
pub mod quotes;

pub use error::AppError;

use axum::http::StatusCode;

use quotary_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error response with message (for form validation errors).
pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Maps a repository error onto its HTTP status, with the error text as body.
pub(crate) fn repo_error_response(error: RepositoryError) -> (StatusCode, String) {
    let status = StatusCode::from_u16(repository_error_to_status_code(&error))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, error.to_string())
}
