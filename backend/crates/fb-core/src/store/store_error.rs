use crate::ErrorLocation;

use thiserror::Error;

/// Failures a credential store may report
#[derive(Error, Debug)]
pub enum StoreError {
    /// The email uniqueness constraint rejected a write
    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    /// The store could not complete the operation
    #[error("Credential store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
