use crate::input_validation::validate_profile;
use crate::{
    AuthError, BuddyMatcher, Clock, DEFAULT_BCRYPT_COST, DEFAULT_RESULT_CAP, IdentityResolver,
    LoginRateLimiter, PasswordHasher, RateLimitConfig, Result as AuthErrorResult, SessionConfig,
    SessionIssuer, SessionToken, SystemClock,
};

use fb_core::{CredentialStore, LoginAttempt, MatchAttributes, UserProfile, UserSummary};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};
use uuid::Uuid;

/// Everything needed to wire the authentication components together
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub session: SessionConfig,
    pub bcrypt_cost: u32,
    pub result_cap: usize,
    pub rate_limit: RateLimitConfig,
}

impl AuthSettings {
    pub fn new(session: SessionConfig) -> Self {
        Self {
            session,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            result_cap: DEFAULT_RESULT_CAP,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Facade used by the transport layer.
///
/// Owns the resolver, issuer, matcher and login throttle over one shared store.
/// This is the boundary where an unknown email on local login becomes a generic
/// credential failure.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    resolver: IdentityResolver,
    issuer: SessionIssuer,
    matcher: BuddyMatcher,
    rate_limiter: LoginRateLimiter,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, settings: AuthSettings) -> AuthErrorResult<Self> {
        Self::with_clock(store, settings, Arc::new(SystemClock))
    }

    pub fn with_clock(
        store: Arc<dyn CredentialStore>,
        settings: AuthSettings,
        clock: Arc<dyn Clock>,
    ) -> AuthErrorResult<Self> {
        let hasher = PasswordHasher::new(settings.bcrypt_cost)?;

        Ok(Self {
            resolver: IdentityResolver::new(store.clone(), hasher),
            issuer: SessionIssuer::with_clock(&settings.session, clock),
            matcher: BuddyMatcher::new(store.clone(), settings.result_cap),
            rate_limiter: LoginRateLimiter::new(settings.rate_limit),
            store,
        })
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<UserSummary> {
        let user = self.resolver.register_local(name, email, password).await?;
        Ok(UserSummary::from(user))
    }

    /// Resolve the attempt to an account and issue a session for it
    pub async fn login(&self, attempt: &LoginAttempt) -> AuthErrorResult<SessionToken> {
        if let LoginAttempt::Local { email, .. } = attempt {
            self.rate_limiter.check(&email.trim().to_lowercase())?;
        }

        let user = match self.resolver.resolve(attempt).await {
            Ok(user) => user,
            Err(e) => {
                if !e.is_transient() {
                    warn!("{} login rejected: {}", attempt.method(), e.error_code());
                }
                return Err(e.into_login_failure());
            }
        };

        let token = self.issuer.issue(user.id)?;
        info!("{} login succeeded for user {}", attempt.method(), user.id);

        Ok(token)
    }

    pub fn validate(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.issuer.validate(token)
    }

    pub async fn find_buddies(&self, user_id: Uuid) -> AuthErrorResult<Vec<UserSummary>> {
        let buddies = self.matcher.find_candidates(user_id).await?;
        Ok(buddies.into_iter().map(UserSummary::from).collect())
    }

    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AuthErrorResult<()> {
        self.resolver
            .change_password(user_id, current_password, new_password)
            .await
    }

    /// Replace match attributes and profile fields, returning the stored result
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        attributes: MatchAttributes,
        profile: UserProfile,
    ) -> AuthErrorResult<UserSummary> {
        validate_profile(&profile, attributes.preferences.len())?;

        if !self
            .store
            .update_profile(user_id, &attributes, &profile)
            .await?
        {
            return Err(not_found(user_id));
        }

        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found(user_id))?;

        Ok(UserSummary::from(user))
    }

    pub async fn find_user(&self, user_id: Uuid) -> AuthErrorResult<UserSummary> {
        self.store
            .find_by_id(user_id)
            .await?
            .map(UserSummary::from)
            .ok_or_else(|| not_found(user_id))
    }

    pub fn issuer(&self) -> &SessionIssuer {
        &self.issuer
    }

    pub fn matcher(&self) -> &BuddyMatcher {
        &self.matcher
    }
}

#[track_caller]
fn not_found(user_id: Uuid) -> AuthError {
    AuthError::NotFound {
        message: format!("User {} not found", user_id),
        location: ErrorLocation::from(Location::caller()),
    }
}
