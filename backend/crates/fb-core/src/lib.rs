pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use models::credential::Credential;
pub use models::email::normalize_email;
pub use models::federated_profile::FederatedProfile;
pub use models::login_attempt::LoginAttempt;
pub use models::match_attributes::MatchAttributes;
pub use models::provider::Provider;
pub use models::provider_profile::{FacebookName, FacebookProfile, GoogleProfile, ProfileEmail};
pub use models::user_identity::UserIdentity;
pub use models::user_profile::UserProfile;
pub use models::user_summary::UserSummary;
pub use store::credential_store::CredentialStore;
pub use store::store_error::{StoreError, StoreResult};

#[cfg(test)]
mod tests;
