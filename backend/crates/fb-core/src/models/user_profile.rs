use serde::{Deserialize, Serialize};

/// Presentation-only profile fields, carried through unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub picture_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}
