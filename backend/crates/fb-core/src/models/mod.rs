pub mod credential;
pub mod email;
pub mod federated_profile;
pub mod login_attempt;
pub mod match_attributes;
pub mod provider;
pub mod provider_profile;
pub mod user_identity;
pub mod user_profile;
pub mod user_summary;
