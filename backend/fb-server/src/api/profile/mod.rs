#[allow(clippy::module_inception)]
pub mod profile;
pub mod update_profile_request;
