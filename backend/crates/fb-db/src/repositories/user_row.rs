use crate::{DbError, Result as DbErrorResult};

use fb_core::{Credential, MatchAttributes, UserIdentity, UserProfile};

use std::collections::BTreeSet;
use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use uuid::Uuid;

pub(crate) const USER_COLUMNS: &str = "id, display_name, email, password_hash, preferences, goal, picture_url, bio, location, created_at";

/// Raw `users` row as stored in SQLite
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub preferences: String,
    pub goal: String,
    pub picture_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub created_at: i64,
}

impl TryFrom<UserRow> for UserIdentity {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        let id = Uuid::parse_str(&row.id).map_err(|e| DbError::InvalidRow {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let preferences: BTreeSet<String> =
            serde_json::from_str(&row.preferences).map_err(|e| DbError::InvalidRow {
                message: format!("Invalid JSON in users.preferences for {}: {}", id, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let created_at =
            DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| DbError::InvalidRow {
                message: format!("Invalid timestamp in users.created_at for {}", id),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let credential = match row.password_hash {
            Some(hash) => Credential::LocalPassword { hash },
            None => Credential::FederatedOnly,
        };

        Ok(UserIdentity {
            id,
            display_name: row.display_name,
            email: row.email,
            credential,
            attributes: MatchAttributes {
                preferences,
                goal: row.goal,
            },
            profile: UserProfile {
                picture_url: row.picture_url,
                bio: row.bio,
                location: row.location,
            },
            created_at,
        })
    }
}

#[track_caller]
pub(crate) fn encode_preferences(preferences: &BTreeSet<String>) -> DbErrorResult<String> {
    serde_json::to_string(preferences).map_err(|e| DbError::InvalidRow {
        message: format!("Failed to encode preferences: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
