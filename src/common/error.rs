// Error handling types for the API

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use crate::services::{IdentityError, TelemetryError};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    Conflict(String),
    NotFound(String),
    InternalServer(String),
    ServiceUnavailable(String),
    DatabaseError(sqlx::Error),
    ValidationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service Unavailable: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
            ApiError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            // Uniqueness violations share the 400 of every other registration failure
            ApiError::BadRequest(_) | ApiError::Conflict(_) | ApiError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServer(_) | ApiError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let (error_message, code) = match self {
            ApiError::Unauthorized(msg) => (msg, "UNAUTHORIZED"),
            ApiError::Forbidden(msg) => (msg, "FORBIDDEN"),
            ApiError::BadRequest(msg) => (msg, "BAD_REQUEST"),
            ApiError::Conflict(msg) => (msg, "CONFLICT"),
            ApiError::NotFound(msg) => (msg, "NOT_FOUND"),
            ApiError::InternalServer(msg) => (msg, "INTERNAL_SERVER_ERROR"),
            ApiError::ServiceUnavailable(msg) => (msg, "SERVICE_UNAVAILABLE"),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                ("Database operation failed".to_string(), "DATABASE_ERROR")
            }
            ApiError::ValidationError(msg) => (msg, "VALIDATION_ERROR"),
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Malformed or mistyped JSON bodies are validation failures like any other
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        let msg = err.to_string();
        match err {
            IdentityError::MissingFields
            | IdentityError::InvalidEmail
            | IdentityError::InvalidPhoneNumber
            | IdentityError::MissingCredentials
            | IdentityError::MissingDeviceId
            | IdentityError::MissingVehicleNumber
            | IdentityError::MissingValue => ApiError::ValidationError(msg),
            IdentityError::EmailExists | IdentityError::PhoneExists => ApiError::Conflict(msg),
            IdentityError::InvalidCredentials | IdentityError::Unauthorized => {
                ApiError::Unauthorized(msg)
            }
            IdentityError::Forbidden => ApiError::Forbidden(msg),
            IdentityError::Database(e) => ApiError::DatabaseError(e),
            IdentityError::PasswordHash(_) | IdentityError::TokenEncoding(_) => {
                error!(error = %msg, "Credential processing failed");
                ApiError::InternalServer("credential processing failed".to_string())
            }
        }
    }
}

impl From<TelemetryError> for ApiError {
    fn from(err: TelemetryError) -> Self {
        let msg = err.to_string();
        match err {
            TelemetryError::MissingFields(_) => ApiError::ValidationError(msg),
            TelemetryError::NotFound => ApiError::NotFound(msg),
            TelemetryError::Database(e) => ApiError::DatabaseError(e),
        }
    }
}
