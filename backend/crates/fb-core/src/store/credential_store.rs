use crate::{Credential, MatchAttributes, StoreResult, UserIdentity, UserProfile};

use std::collections::BTreeSet;

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence contract for account records.
///
/// Implementations own the email uniqueness invariant: `insert` must report
/// [`crate::StoreError::DuplicateEmail`] when the constraint rejects a write, even if
/// the caller checked beforehand. Emails passed in are already normalized.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserIdentity>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<UserIdentity>>;

    async fn insert(&self, user: &UserIdentity) -> StoreResult<UserIdentity>;

    /// Users other than `exclude_id` whose goal equals `goal` and whose
    /// preferences intersect `preferences`, ordered by id, at most `limit`.
    async fn list_candidates(
        &self,
        exclude_id: Uuid,
        preferences: &BTreeSet<String>,
        goal: &str,
        limit: usize,
    ) -> StoreResult<Vec<UserIdentity>>;

    /// Returns false when no record has this id
    async fn update_credential(&self, id: Uuid, credential: &Credential) -> StoreResult<bool>;

    /// Returns false when no record has this id
    async fn update_profile(
        &self,
        id: Uuid,
        attributes: &MatchAttributes,
        profile: &UserProfile,
    ) -> StoreResult<bool>;
}
