use std::fmt;
use std::time::Duration;

pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Signing material and lifetime for session tokens
#[derive(Clone)]
pub struct SessionConfig {
    pub secret: Vec<u8>,
    pub ttl: Duration,
}

impl SessionConfig {
    pub fn new(secret: impl AsRef<[u8]>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn with_default_ttl(secret: impl AsRef<[u8]>) -> Self {
        Self::new(secret, DEFAULT_TOKEN_TTL_SECS)
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
