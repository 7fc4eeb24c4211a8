use fb_core::{CoreError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid input '{field}': {message} {location}")]
    InvalidInput {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Persistence error: {source} {location}")]
    Persistence {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidCredential { .. } => "INVALID_CREDENTIALS",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidInput { .. } => "VALIDATION_ERROR",
            Self::MalformedToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::TokenEncode { .. } => "TOKEN_ENCODE_FAILED",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::DuplicateEmail { .. } => Some("email"),
            _ => None,
        }
    }

    /// Only store failures may succeed on a later attempt
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    /// Local login must not reveal whether an email is registered, so an unknown
    /// account is reported exactly like a wrong password.
    pub fn into_login_failure(self) -> Self {
        match self {
            Self::NotFound { location, .. } => Self::InvalidCredential { location },
            other => other,
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail { email, location } => {
                Self::DuplicateEmail { email, location }
            }
            source => Self::Persistence {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        Self::InvalidInput {
            field: e.field().unwrap_or("input"),
            message: e.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
