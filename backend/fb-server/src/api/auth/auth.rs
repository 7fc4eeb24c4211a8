//! Authentication REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, ChangePasswordRequest, LoginRequest,
    RegisterRequest, SessionResponse, TokenResponse, UserResponse,
};

use fb_core::{FederatedProfile, LoginAttempt, Provider};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(req) = payload?;

    let user = state
        .auth
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password produce the same 401 body.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload?;

    let session = state
        .auth
        .login(&LoginAttempt::local(req.email, req.password))
        .await?;

    Ok(Json(session.into()))
}

/// POST /api/auth/federated/{provider}
///
/// The body is the provider's profile document as delivered after its own
/// verification. First contact creates the account.
pub async fn federated_login(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let provider = Provider::from_str(&provider).map_err(ApiError::from)?;
    let Json(document) = payload?;

    let profile = FederatedProfile::from_provider_json(provider, document)?;
    let session = state
        .auth
        .login(&LoginAttempt::federated(provider, profile))
        .await?;

    Ok(Json(session.into()))
}

/// GET /api/auth/session
pub async fn session(AuthenticatedUser(user_id): AuthenticatedUser) -> Json<SessionResponse> {
    Json(SessionResponse { user_id })
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    payload: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(req) = payload?;

    state
        .auth
        .change_password(user_id, &req.current_password, &req.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
