use crate::{AuthError, Result as AuthErrorResult};

use fb_core::{CredentialStore, UserIdentity};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;
use uuid::Uuid;

pub const DEFAULT_RESULT_CAP: usize = 5;

/// Selects compatible buddies for a user.
///
/// A candidate is any other user sharing at least one preference tag and the
/// exact same goal. Unset goals compare equal, so users without a goal all match
/// each other on that criterion. Results are ordered by id and capped.
pub struct BuddyMatcher {
    store: Arc<dyn CredentialStore>,
    result_cap: usize,
}

impl BuddyMatcher {
    pub fn new(store: Arc<dyn CredentialStore>, result_cap: usize) -> Self {
        Self { store, result_cap }
    }

    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    pub async fn find_candidates(&self, requester_id: Uuid) -> AuthErrorResult<Vec<UserIdentity>> {
        let requester = self
            .store
            .find_by_id(requester_id)
            .await?
            .ok_or_else(|| AuthError::NotFound {
                message: format!("User {} not found", requester_id),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let wanted = &requester.attributes;
        if wanted.preferences.is_empty() {
            debug!("User {} has no preferences, no buddies possible", requester_id);
            return Ok(Vec::new());
        }

        let mut candidates = self
            .store
            .list_candidates(requester.id, &wanted.preferences, &wanted.goal, self.result_cap)
            .await?;

        // The store filters already; re-check so the invariants hold for any backend
        candidates.retain(|c| c.id != requester.id && wanted.is_compatible_with(&c.attributes));
        candidates.sort_by_key(|c| c.id);
        candidates.truncate(self.result_cap);

        debug!(
            "Found {} buddy candidates for user {}",
            candidates.len(),
            requester_id
        );

        Ok(candidates)
    }
}
