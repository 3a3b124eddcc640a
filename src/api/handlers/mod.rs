//! HTTP handlers.

mod system;
mod todos;


pub use system::*;
pub use todos::*;

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Invalid todo ID")]
    pub error: String,
}

/// Error half of every handler result.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map a store error onto a status code and client-safe message.
///
/// Store failures are logged and reported as a generic 500.
pub(crate) fn db_error(e: DbError) -> HandlerError {
    match e {
        DbError::InvalidIdentifier { .. } => {
            error_response(StatusCode::BAD_REQUEST, "Invalid todo ID")
        }
        DbError::Validation { message } => error_response(StatusCode::BAD_REQUEST, message),
        DbError::Database { .. } | DbError::Connection { .. } => {
            error!(error = %e, "store operation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
