use crate::{UserIdentity, UserProfile};

use serde::Serialize;
use uuid::Uuid;

/// Client-safe view of an account. Never carries credential material or email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub display_name: String,
    pub preferences: Vec<String>,
    pub goal: String,
    pub profile: UserProfile,
}

impl From<&UserIdentity> for UserSummary {
    fn from(user: &UserIdentity) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name.clone(),
            preferences: user.attributes.preferences.iter().cloned().collect(),
            goal: user.attributes.goal.clone(),
            profile: user.profile.clone(),
        }
    }
}

impl From<UserIdentity> for UserSummary {
    fn from(user: UserIdentity) -> Self {
        Self::from(&user)
    }
}
