pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod startup;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{change_password, federated_login, login, register, session},
        change_password_request::ChangePasswordRequest,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        session_response::SessionResponse,
        token_response::TokenResponse,
        user_response::UserResponse,
    },
    buddies::{buddies::list_matches, buddy_list_response::BuddyListResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    profile::{
        profile::{get_profile, update_profile},
        update_profile_request::UpdateProfileRequest,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
