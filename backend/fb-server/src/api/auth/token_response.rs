use fb_auth::SessionToken;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Issued session, returned by every login route
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: &'static str,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl From<SessionToken> for TokenResponse {
    fn from(session: SessionToken) -> Self {
        Self {
            token: session.token,
            token_type: "Bearer",
            user_id: session.user_id,
            expires_at: session.expires_at,
        }
    }
}
