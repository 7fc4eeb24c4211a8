use crate::{
    AppState, change_password, federated_login, get_profile, health, list_matches, login,
    register, session, update_profile,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/federated/{provider}", post(federated_login))
        .route("/api/auth/session", get(session))
        .route("/api/auth/password", put(change_password))
        // Profile and matching
        .route("/api/profile", get(get_profile).put(update_profile))
        .route("/api/buddy/matches", get(list_matches))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
