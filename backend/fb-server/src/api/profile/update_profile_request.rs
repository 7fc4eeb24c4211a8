use fb_core::{MatchAttributes, UserProfile};

use serde::Deserialize;

/// Full replacement of a user's matching attributes and profile fields
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub preferences: Vec<String>,

    /// Empty or missing means no goal
    #[serde(default)]
    pub goal: String,

    #[serde(default)]
    pub picture_url: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub location: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_parts(self) -> (MatchAttributes, UserProfile) {
        let attributes = MatchAttributes::new(&self.preferences, &self.goal);
        let profile = UserProfile {
            picture_url: self.picture_url,
            bio: self.bio,
            location: self.location,
        };
        (attributes, profile)
    }
}
