pub mod auth_service;
pub mod buddy_matcher;
pub mod claims;
pub mod clock;
pub mod error;
pub mod identity_resolver;
pub mod input_validation;
pub mod login_rate_limiter;
pub mod password_hasher;
pub mod rate_limit_config;
pub mod session_config;
pub mod session_issuer;
pub mod session_token;

pub use auth_service::{AuthService, AuthSettings};
pub use buddy_matcher::{BuddyMatcher, DEFAULT_RESULT_CAP};
pub use claims::Claims;
pub use clock::{Clock, SystemClock};
pub use error::{AuthError, Result};
pub use identity_resolver::IdentityResolver;
pub use login_rate_limiter::LoginRateLimiter;
pub use password_hasher::{DEFAULT_BCRYPT_COST, PasswordHasher};
pub use rate_limit_config::RateLimitConfig;
pub use session_config::{DEFAULT_TOKEN_TTL_SECS, SessionConfig};
pub use session_issuer::SessionIssuer;
pub use session_token::SessionToken;

#[cfg(test)]
mod tests;
