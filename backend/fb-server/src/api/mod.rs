pub mod auth;
pub mod buddies;
pub mod error;
pub mod extractors;
pub mod profile;
