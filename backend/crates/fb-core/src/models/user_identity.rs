use crate::{Credential, FederatedProfile, MatchAttributes, UserProfile};

use chrono::{DateTime, Timelike, Utc};
use uuid::Uuid;

/// Canonical account record. One per normalized email.
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub credential: Credential,
    pub attributes: MatchAttributes,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
}

/// Stored timestamps carry whole seconds
fn created_now() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(0).unwrap_or(now)
}

impl UserIdentity {
    /// New account registered with a local password. `email` must already be normalized.
    pub fn new_local(display_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            email,
            credential: Credential::local(password_hash),
            attributes: MatchAttributes::default(),
            profile: UserProfile::default(),
            created_at: created_now(),
        }
    }

    /// New account materialized on first federated login
    pub fn new_federated(profile: &FederatedProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: profile.display_name.clone(),
            email: profile.email.clone(),
            credential: Credential::FederatedOnly,
            attributes: MatchAttributes::default(),
            profile: UserProfile::default(),
            created_at: created_now(),
        }
    }
}
