//! Buddy matching REST API handlers

use crate::{ApiResult, AppState, AuthenticatedUser, BuddyListResponse};

use axum::{Json, extract::State};

/// GET /api/buddy/matches
///
/// Up to the configured cap of users sharing a preference and the same goal.
/// An empty list is a normal outcome.
pub async fn list_matches(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> ApiResult<Json<BuddyListResponse>> {
    let buddies = state.auth.find_buddies(user_id).await?;

    Ok(Json(BuddyListResponse { buddies }))
}
