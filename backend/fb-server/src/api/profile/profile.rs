//! Profile REST API handlers

use crate::{ApiResult, AppState, AuthenticatedUser, UpdateProfileRequest, UserResponse};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state.auth.find_user(user_id).await?;

    Ok(Json(UserResponse { user }))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Json(req) = payload?;
    let (attributes, profile) = req.into_parts();

    let user = state
        .auth
        .update_profile(user_id, attributes, profile)
        .await?;

    Ok(Json(UserResponse { user }))
}
