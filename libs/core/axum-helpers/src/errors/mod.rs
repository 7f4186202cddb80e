pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Message sent to clients for every unexpected failure.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Body of every error response.
///
/// ```json
/// { "message": "Category not found. Please provide a valid category id" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure that can be turned into an HTTP response.
///
/// Client errors carry their message through to the body. Server errors
/// keep their detail in the log and answer with
/// [`INTERNAL_SERVER_ERROR_MESSAGE`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidJson(_) | AppError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest(_) => ErrorCode::ValidationError,
            AppError::InvalidJson(_) => ErrorCode::InvalidJson,
            AppError::InvalidQuery(_) => ErrorCode::InvalidQuery,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if code.is_server_error() {
            tracing::error!(
                error_code = code.code(),
                error_kind = code.as_str(),
                error = ?self,
                "Request failed"
            );
        } else {
            tracing::info!(
                error_code = code.code(),
                error_kind = code.as_str(),
                "Request rejected: {}",
                self
            );
        }

        let message = match self {
            AppError::BadRequest(msg)
            | AppError::InvalidJson(msg)
            | AppError::InvalidQuery(msg)
            | AppError::NotFound(msg) => msg,
            AppError::InternalServerError(_) | AppError::Database(_) => {
                INTERNAL_SERVER_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
