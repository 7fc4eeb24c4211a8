//! Axum extractor for bearer session tokens

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// The user bound to the request's `Authorization: Bearer <token>` header.
///
/// Only the token is checked. Handlers that need the account record fetch it
/// themselves, so a token for a since-deleted account still extracts.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(parts)?;
            let user_id = state.auth.validate(token)?;
            Ok(AuthenticatedUser(user_id))
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized {
            code: "MISSING_TOKEN",
            message: "Authorization header is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized {
            code: "INVALID_TOKEN",
            message: "Authorization header must be 'Bearer <token>'".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
