#[allow(clippy::module_inception)]
pub mod auth;
pub mod change_password_request;
pub mod login_request;
pub mod register_request;
pub mod session_response;
pub mod token_response;
pub mod user_response;
