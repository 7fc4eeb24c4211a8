use crate::{ConfigError, ConfigErrorResult, DEFAULT_RESULT_CAP, MAX_RESULT_CAP, MIN_RESULT_CAP};

use serde::Deserialize;

/// Buddy matching settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Maximum buddies returned per request
    pub result_cap: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            result_cap: DEFAULT_RESULT_CAP,
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_RESULT_CAP..=MAX_RESULT_CAP).contains(&self.result_cap) {
            return Err(ConfigError::matching(format!(
                "matching.result_cap must be {}-{}, got {}",
                MIN_RESULT_CAP, MAX_RESULT_CAP, self.result_cap
            )));
        }

        Ok(())
    }
}
