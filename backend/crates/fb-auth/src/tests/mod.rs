
use crate::{AuthService, AuthSettings, Clock, PasswordHasher, SessionConfig};

use fb_core::{CredentialStore, MatchAttributes, UserIdentity};
use fb_db::{UserRepository, connect_in_memory};

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeDelta, Utc};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const TEST_PASSWORD: &str = "correct-horse-battery";

/// Clock that only moves when told to
pub(crate) struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub(crate) fn new(start: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(start),
        })
    }

    pub(crate) fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub(crate) async fn create_test_store() -> Arc<dyn CredentialStore> {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");
    Arc::new(UserRepository::new(pool))
}

pub(crate) fn create_test_hasher() -> PasswordHasher {
    PasswordHasher::new(4).expect("cost 4 is valid")
}

pub(crate) fn create_test_settings() -> AuthSettings {
    let mut settings = AuthSettings::new(SessionConfig::with_default_ttl(TEST_SECRET));
    settings.bcrypt_cost = 4;
    settings
}

pub(crate) async fn create_test_service() -> (AuthService, Arc<dyn CredentialStore>) {
    let store = create_test_store().await;
    let service = AuthService::new(store.clone(), create_test_settings())
        .expect("Failed to create auth service");
    (service, store)
}

/// Insert a local account with the given match attributes straight into the store
pub(crate) async fn insert_user_with_attributes(
    store: &Arc<dyn CredentialStore>,
    name: &str,
    preferences: &[&str],
    goal: &str,
) -> UserIdentity {
    let mut user = UserIdentity::new_local(
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
        "$2b$04$placeholderplaceholderplaceholderplaceholderplace".to_string(),
    );
    user.attributes = MatchAttributes::new(preferences.iter().copied(), goal);
    store.insert(&user).await.expect("Failed to insert user")
}
