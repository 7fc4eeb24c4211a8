use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown identity provider: {value} {location}")]
    UnknownProvider {
        value: String,
        location: ErrorLocation,
    },

    #[error("Malformed {provider} profile: {source} {location}")]
    ProfileJson {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name for validation failures, used in client-facing error bodies
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::UnknownProvider { .. } => Some("provider"),
            Self::ProfileJson { .. } => Some("profile"),
        }
    }

    /// Client-safe message without the source location
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::UnknownProvider { value, .. } => format!("Unknown identity provider: {}", value),
            Self::ProfileJson {
                provider, source, ..
            } => format!("Malformed {} profile: {}", provider, source),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
