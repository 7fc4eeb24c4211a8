use crate::AppState;
use crate::error::Result as ServerErrorResult;

use fb_auth::{AuthService, AuthSettings, RateLimitConfig, SessionConfig};
use fb_config::{Config, ConfigError};
use fb_db::UserRepository;

use std::path::Path;
use std::sync::Arc;

use log::info;

/// Map the loaded configuration onto the auth layer's settings
pub fn auth_settings(config: &Config) -> ServerErrorResult<AuthSettings> {
    let secret = config
        .auth
        .jwt_secret
        .clone()
        .ok_or_else(|| ConfigError::auth("jwt_secret is required"))?;

    Ok(AuthSettings {
        session: SessionConfig::new(secret, config.auth.token_ttl_secs),
        bcrypt_cost: config.auth.bcrypt_cost,
        result_cap: config.matching.result_cap,
        rate_limit: RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        },
    })
}

/// Open the database (running migrations) and wire the auth service over it
pub async fn build_state(config: &Config, database_path: &Path) -> ServerErrorResult<AppState> {
    let settings = auth_settings(config)?;

    info!("Connecting to database: {}", database_path.display());
    let pool = fb_db::connect(database_path, config.database.max_connections).await?;

    let store = Arc::new(UserRepository::new(pool.clone()));
    let auth = AuthService::new(store, settings)?;
    info!("Auth service initialized");

    Ok(AppState::new(auth, pool))
}
