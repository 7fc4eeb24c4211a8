use crate::repositories::user_row::{USER_COLUMNS, UserRow, encode_preferences};
use crate::{DbError, Result as DbErrorResult};

use fb_core::{Credential, CredentialStore, MatchAttributes, StoreResult, UserIdentity, UserProfile};

use std::collections::BTreeSet;
use std::panic::Location;

use async_trait::async_trait;
use chrono::Timelike;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// SQLite-backed credential store over the `users` table
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserIdentity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserIdentity::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserIdentity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserIdentity::try_from).transpose()
    }

    pub async fn create(&self, user: &UserIdentity) -> DbErrorResult<()> {
        let preferences = encode_preferences(&user.attributes.preferences)?;

        let result = sqlx::query(
            r#"
                INSERT INTO users (id, display_name, email, password_hash, preferences, goal, picture_url, bio, location, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(user.id.to_string())
        .bind(&user.display_name)
        .bind(&user.email)
        .bind(user.credential.password_hash())
        .bind(preferences)
        .bind(&user.attributes.goal)
        .bind(&user.profile.picture_url)
        .bind(&user.profile.bio)
        .bind(&user.profile.location)
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DbError::DuplicateEmail {
                    email: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_candidates(
        &self,
        exclude_id: Uuid,
        preferences: &BTreeSet<String>,
        goal: &str,
        limit: usize,
    ) -> DbErrorResult<Vec<UserIdentity>> {
        if preferences.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let wanted = encode_preferences(preferences)?;
        let sql = format!(
            r#"
                SELECT {USER_COLUMNS}
                FROM users
                WHERE id != ?
                  AND goal = ?
                  AND EXISTS (
                      SELECT 1 FROM json_each(users.preferences) AS theirs
                      WHERE theirs.value IN (SELECT value FROM json_each(?))
                  )
                ORDER BY id
                LIMIT ?
                "#
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(exclude_id.to_string())
            .bind(goal)
            .bind(wanted)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(UserIdentity::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: Option<&str>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn update_profile_fields(
        &self,
        id: Uuid,
        attributes: &MatchAttributes,
        profile: &UserProfile,
    ) -> DbErrorResult<bool> {
        let preferences = encode_preferences(&attributes.preferences)?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET preferences = ?, goal = ?, picture_url = ?, bio = ?, location = ?
                WHERE id = ?
                "#,
        )
        .bind(preferences)
        .bind(&attributes.goal)
        .bind(&profile.picture_url)
        .bind(&profile.bio)
        .bind(&profile.location)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserIdentity>> {
        Ok(UserRepository::find_by_email(self, email).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<UserIdentity>> {
        Ok(UserRepository::find_by_id(self, id).await?)
    }

    async fn insert(&self, user: &UserIdentity) -> StoreResult<UserIdentity> {
        self.create(user).await?;

        // Reflect what the row holds: `created_at` is stored in whole seconds
        let mut stored = user.clone();
        stored.created_at = stored
            .created_at
            .with_nanosecond(0)
            .unwrap_or(stored.created_at);
        Ok(stored)
    }

    async fn list_candidates(
        &self,
        exclude_id: Uuid,
        preferences: &BTreeSet<String>,
        goal: &str,
        limit: usize,
    ) -> StoreResult<Vec<UserIdentity>> {
        Ok(self
            .find_candidates(exclude_id, preferences, goal, limit)
            .await?)
    }

    async fn update_credential(&self, id: Uuid, credential: &Credential) -> StoreResult<bool> {
        Ok(self
            .update_password_hash(id, credential.password_hash())
            .await?)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        attributes: &MatchAttributes,
        profile: &UserProfile,
    ) -> StoreResult<bool> {
        Ok(self.update_profile_fields(id, attributes, profile).await?)
    }
}
