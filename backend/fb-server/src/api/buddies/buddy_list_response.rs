use fb_core::UserSummary;

use serde::Serialize;

/// Buddy suggestions, ordered by user id
#[derive(Debug, Serialize)]
pub struct BuddyListResponse {
    pub buddies: Vec<UserSummary>,
}
