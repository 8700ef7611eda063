use crate::models::ValidationError;
use crate::services::{ServiceError, error_chain};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors as the client sees them. Handlers only create `BadRequest` themselves (request
/// shape); the router creates `NotFound`, `MethodNotAllowed` and `Timeout`; everything else
/// comes from a `ServiceError`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Internal(String),
}

/// The JSON error envelope: `{"status": 404, "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

pub fn write_json_error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        status: status.as_u16(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn decode(shape: &str, rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!(
            "error decoding request body into {shape}: {}",
            rejection.body_text()
        ))
    }

    pub fn query(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("invalid query string: {}", rejection.body_text()))
    }

    pub fn invalid_id(raw: &str) -> Self {
        ApiError::BadRequest(format!("parsing id: invalid value '{raw}'"))
    }

    /// The path segment could not even be extracted (e.g. bad percent-encoding).
    pub fn path(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("parsing id: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        write_json_error(status, self.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            // Duplicates answer 400 like any other rejected create.
            ServiceError::Conflict(_) => ApiError::BadRequest(err.to_string()),
            ServiceError::Database { .. } => {
                let message = error_chain(&err);
                tracing::error!(error = %message, "store failure");
                ApiError::Internal(message)
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
