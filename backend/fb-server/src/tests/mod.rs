mod api;
mod startup;

use crate::AppState;

use fb_auth::{AuthService, AuthSettings, SessionConfig};
use fb_db::{UserRepository, connect_in_memory};

use std::sync::Arc;

pub(crate) const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes";

pub(crate) async fn create_test_state() -> AppState {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");

    let mut settings = AuthSettings::new(SessionConfig::with_default_ttl(TEST_SECRET));
    settings.bcrypt_cost = 4;

    let auth = AuthService::new(Arc::new(UserRepository::new(pool.clone())), settings)
        .expect("Failed to create auth service");

    AppState::new(auth, pool)
}
