//! REST API error types
//!
//! Every failure leaves the server as `{ "error": { code, message, field? } }`
//! with a status derived from the auth error taxonomy.

use fb_auth::AuthError;
use fb_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_CREDENTIALS", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed or expired credentials (401)
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unique constraint hit, e.g. email already registered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Throttled (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Unparseable request body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Unauthorized { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Conflict {
                code,
                message,
                field,
                ..
            } => ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
            ApiError::TooManyRequests { message, .. } => ApiErrorBody {
                code: "RATE_LIMIT_EXCEEDED".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let code = e.error_code();

        match e {
            AuthError::InvalidCredential { .. } => ApiError::Unauthorized {
                code,
                message: "Invalid email or password".to_string(),
                location,
            },
            AuthError::MalformedToken { .. } => ApiError::Unauthorized {
                code,
                message: "Session token is invalid".to_string(),
                location,
            },
            AuthError::TokenExpired { .. } => ApiError::Unauthorized {
                code,
                message: "Session token has expired".to_string(),
                location,
            },
            AuthError::NotFound { message, .. } => ApiError::NotFound { message, location },
            AuthError::DuplicateEmail { .. } => ApiError::Conflict {
                code,
                message: "Email is already registered".to_string(),
                field: Some("email".to_string()),
                location,
            },
            AuthError::InvalidInput { field, message, .. } => ApiError::Validation {
                message,
                field: Some(field.to_string()),
                location,
            },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::TooManyRequests {
                message: format!(
                    "Too many login attempts: limit is {} per {}s",
                    limit, window_secs
                ),
                location,
            },
            // Don't expose internal details to clients
            other => {
                log::error!("Auth operation failed: {}", other);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            field: e.field().map(str::to_string),
            message: e.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert JSON extraction failures to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
