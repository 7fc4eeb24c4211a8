use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

/// Login attempts one email may make inside a window
pub const LOGIN_ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=1000;
pub const DEFAULT_LOGIN_ATTEMPTS: u32 = 10;

/// Throttle windows longer than a day would amount to a lockout
pub const LOGIN_WINDOW_SECS_RANGE: RangeInclusive<u64> = 1..=86_400;
pub const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;

/// Per-email throttle on local password logins (`[rate_limit]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_LOGIN_ATTEMPTS,
            window_secs: DEFAULT_LOGIN_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    /// Time for one spent attempt to come back once the burst is used up
    pub fn replenish_interval(&self) -> Duration {
        self.window() / self.max_requests.max(1)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !LOGIN_ATTEMPTS_RANGE.contains(&self.max_requests) {
            return Err(ConfigError::rate_limit(format!(
                "rate_limit.max_requests must be within {:?} login attempts, got {}",
                LOGIN_ATTEMPTS_RANGE, self.max_requests
            )));
        }

        if !LOGIN_WINDOW_SECS_RANGE.contains(&self.window_secs) {
            return Err(ConfigError::rate_limit(format!(
                "rate_limit.window_secs must be within {:?} seconds, got {}",
                LOGIN_WINDOW_SECS_RANGE, self.window_secs
            )));
        }

        Ok(())
    }
}
