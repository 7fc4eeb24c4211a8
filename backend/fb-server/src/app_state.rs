use fb_auth::AuthService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    /// Kept for health checks; all account access goes through `auth`
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(auth: AuthService, pool: SqlitePool) -> Self {
        Self {
            auth: Arc::new(auth),
            pool,
        }
    }
}
