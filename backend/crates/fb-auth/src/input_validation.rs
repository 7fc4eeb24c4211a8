use crate::{AuthError, Result as AuthErrorResult};

use fb_core::UserProfile;

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_PASSWORD_LENGTH: usize = 8;
/// bcrypt ignores everything past 72 bytes
pub const MAX_PASSWORD_LENGTH: usize = 72;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;
pub const MAX_BIO_LENGTH: usize = 1000;
pub const MAX_PICTURE_URL_LENGTH: usize = 2048;
pub const MAX_PREFERENCES: usize = 32;

#[track_caller]
fn invalid(field: &'static str, message: String) -> AuthError {
    AuthError::InvalidInput {
        field,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Returns the trimmed display name
#[track_caller]
pub fn validate_display_name(name: &str) -> AuthErrorResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(invalid("name", "name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
        return Err(invalid(
            "name",
            format!("name exceeds {} characters", MAX_DISPLAY_NAME_LENGTH),
        ));
    }

    Ok(name.to_string())
}

#[track_caller]
pub fn validate_password(password: &str) -> AuthErrorResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(invalid(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(invalid(
            "password",
            format!("password must be at most {} bytes", MAX_PASSWORD_LENGTH),
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_profile(profile: &UserProfile, preference_count: usize) -> AuthErrorResult<()> {
    if preference_count > MAX_PREFERENCES {
        return Err(invalid(
            "preferences",
            format!("at most {} preferences allowed", MAX_PREFERENCES),
        ));
    }
    if profile.bio.as_ref().is_some_and(|bio| bio.chars().count() > MAX_BIO_LENGTH) {
        return Err(invalid(
            "bio",
            format!("bio exceeds {} characters", MAX_BIO_LENGTH),
        ));
    }
    if profile
        .picture_url
        .as_ref()
        .is_some_and(|url| url.len() > MAX_PICTURE_URL_LENGTH)
    {
        return Err(invalid(
            "picture_url",
            format!("picture_url exceeds {} bytes", MAX_PICTURE_URL_LENGTH),
        ));
    }

    Ok(())
}
