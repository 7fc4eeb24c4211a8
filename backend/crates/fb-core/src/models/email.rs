use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

const MAX_EMAIL_LENGTH: usize = 254;

/// Normalize an email address into the form used as the account join key.
///
/// Trims surrounding whitespace and lowercases the whole address so that lookups
/// are case-insensitive. Rejects addresses without exactly one `@`, with an empty
/// local or domain part, or with embedded whitespace.
#[track_caller]
pub fn normalize_email(raw: &str) -> CoreResult<String> {
    let email = raw.trim().to_lowercase();

    let invalid = |message: &str| CoreError::Validation {
        field: "email",
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    if email.is_empty() {
        return Err(invalid("email cannot be empty"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email exceeds maximum length"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("email cannot contain whitespace"));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(invalid("email must look like name@domain")),
    }
}
