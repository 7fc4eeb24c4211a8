use fb_core::UserSummary;

use serde::Serialize;

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserSummary,
}
