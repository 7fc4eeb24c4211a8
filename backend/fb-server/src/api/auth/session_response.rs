use serde::Serialize;
use uuid::Uuid;

/// Identity bound to a valid session token
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_id: Uuid,
}
