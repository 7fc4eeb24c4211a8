use crate::{AuthError, Claims, Clock, Result as AuthErrorResult, SessionConfig, SessionToken, SystemClock};

use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;
use uuid::Uuid;

/// Mints and validates HS256 session tokens.
///
/// Tokens are stateless: possession of a correctly signed token whose `exp` has
/// not passed is the only evidence checked. Expiry is evaluated against the
/// injected [`Clock`] rather than inside the JWT library so tests can pin time.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl SessionIssuer {
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &SessionConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            validation,
            ttl: TimeDelta::from_std(config.ttl).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    /// Issue a token for `user_id`, valid from now until now + ttl
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<SessionToken> {
        // `exp` carries whole seconds, so the reported expiry must too
        let now = self.clock.now();
        let issued_at = now.with_nanosecond(0).unwrap_or(now);
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let claims = Claims::new(user_id, issued_at.timestamp(), expires_at.timestamp());

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        debug!("Issued session token for user {}", user_id);

        Ok(SessionToken {
            token,
            user_id,
            issued_at,
            expires_at,
        })
    }

    /// Verify the signature and expiry of `token` and return the bound user id
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Uuid> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| AuthError::MalformedToken {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        let claims = token_data.claims;
        let user_id = claims.user_id()?;

        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC);
        if self.clock.now() > expires_at {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user_id)
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }
}
