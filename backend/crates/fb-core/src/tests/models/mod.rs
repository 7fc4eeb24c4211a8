mod credential;
mod email;
mod match_attributes;
mod provider;
mod provider_profile;
mod user_identity;
