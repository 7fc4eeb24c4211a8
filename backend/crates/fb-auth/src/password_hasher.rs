use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// bcrypt cost used when configuration does not override it
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Salted bcrypt hashing, run on tokio's blocking pool.
///
/// Also keeps a decoy hash at the same cost so that a login for an unknown or
/// federated-only account spends as long in bcrypt as a real wrong-password check.
pub struct PasswordHasher {
    cost: u32,
    decoy_hash: String,
}

impl PasswordHasher {
    #[track_caller]
    pub fn new(cost: u32) -> AuthErrorResult<Self> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(AuthError::InvalidInput {
                field: "bcrypt_cost",
                message: format!(
                    "bcrypt cost must be {}-{}, got {}",
                    MIN_BCRYPT_COST,
                    MAX_BCRYPT_COST,
                    cost
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let decoy_hash =
            bcrypt::hash(DECOY_PASSWORD, cost).map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { cost, decoy_hash })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::PasswordHash {
                message: format!("Task join error: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Constant-time check of `password` against a stored bcrypt hash
    pub async fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::PasswordHash {
                message: format!("Task join error: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Burn one verification against the decoy hash. The outcome is irrelevant.
    pub async fn verify_decoy(&self, password: &str) {
        let _ = self.verify(password, &self.decoy_hash).await;
    }
}
