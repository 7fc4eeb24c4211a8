use crate::input_validation::{validate_display_name, validate_password};
use crate::{AuthError, PasswordHasher, Result as AuthErrorResult};

use fb_core::{
    Credential, CredentialStore, FederatedProfile, LoginAttempt, Provider, StoreError,
    UserIdentity, normalize_email,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use uuid::Uuid;

/// Turns login attempts into exactly one canonical account per email
pub struct IdentityResolver {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    pub async fn resolve(&self, attempt: &LoginAttempt) -> AuthErrorResult<UserIdentity> {
        match attempt {
            LoginAttempt::Local { email, password } => self.resolve_local(email, password).await,
            LoginAttempt::Federated { provider, profile } => {
                self.resolve_federated(*provider, profile).await
            }
        }
    }

    /// Email + password login.
    ///
    /// Distinguishes `NotFound` from `InvalidCredential` internally; callers facing
    /// clients collapse the two with [`AuthError::into_login_failure`]. Every failure
    /// path spends one bcrypt verification so timing stays uniform.
    pub async fn resolve_local(&self, email: &str, password: &str) -> AuthErrorResult<UserIdentity> {
        let Ok(email) = normalize_email(email) else {
            self.hasher.verify_decoy(password).await;
            return Err(unknown_account());
        };

        let Some(user) = self.store.find_by_email(&email).await? else {
            self.hasher.verify_decoy(password).await;
            debug!("Local login for unknown email {}", email);
            return Err(unknown_account());
        };

        let Some(hash) = user.credential.password_hash() else {
            self.hasher.verify_decoy(password).await;
            debug!("Local login for federated-only account {}", user.id);
            return Err(AuthError::InvalidCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !self.hasher.verify(password, hash).await? {
            debug!("Wrong password for account {}", user.id);
            return Err(AuthError::InvalidCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user)
    }

    /// Register-or-login for a profile already verified by `provider`.
    ///
    /// An existing account with the same email is returned untouched: a federated
    /// login never replaces a local password or attributes.
    pub async fn resolve_federated(
        &self,
        provider: Provider,
        profile: &FederatedProfile,
    ) -> AuthErrorResult<UserIdentity> {
        // Fields are public, so re-run normalization on whatever was handed in
        let profile = FederatedProfile::new(&profile.email, Some(&profile.display_name))?;

        if let Some(existing) = self.store.find_by_email(&profile.email).await? {
            debug!("{} login matched existing account {}", provider, existing.id);
            return Ok(existing);
        }

        let user = UserIdentity::new_federated(&profile);

        match self.store.insert(&user).await {
            Ok(created) => {
                info!("Created account {} from first {} login", created.id, provider);
                Ok(created)
            }
            // Lost a race with a concurrent first login for the same email
            Err(StoreError::DuplicateEmail { .. }) => {
                warn!("Concurrent {} registration for the same email, reusing winner", provider);
                self.store
                    .find_by_email(&user.email)
                    .await?
                    .ok_or_else(|| AuthError::Persistence {
                        source: StoreError::Unavailable {
                            message: "account missing after duplicate insert".to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        },
                        location: ErrorLocation::from(Location::caller()),
                    })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create an account with a local password.
    ///
    /// The pre-check gives a clean error in the common case; the store's unique
    /// constraint is still the authority and maps to `DuplicateEmail` as well.
    pub async fn register_local(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<UserIdentity> {
        let display_name = validate_display_name(name)?;
        let email = normalize_email(email)?;
        validate_password(password)?;

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let hash = self.hasher.hash(password).await?;
        let user = UserIdentity::new_local(display_name, email, hash);
        let created = self.store.insert(&user).await?;

        info!("Registered local account {}", created.id);
        Ok(created)
    }

    /// Replace the local password after checking the current one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AuthErrorResult<()> {
        validate_password(new_password)?;

        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::NotFound {
                message: format!("User {} not found", user_id),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let Some(hash) = user.credential.password_hash() else {
            return Err(AuthError::InvalidCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !self.hasher.verify(current_password, hash).await? {
            return Err(AuthError::InvalidCredential {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let new_hash = self.hasher.hash(new_password).await?;
        if !self
            .store
            .update_credential(user_id, &Credential::local(new_hash))
            .await?
        {
            return Err(AuthError::NotFound {
                message: format!("User {} not found", user_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Password changed for account {}", user_id);
        Ok(())
    }
}

#[track_caller]
fn unknown_account() -> AuthError {
    AuthError::NotFound {
        message: "no account for this email".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
