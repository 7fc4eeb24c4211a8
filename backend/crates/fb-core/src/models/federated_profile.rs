use crate::{CoreResult, normalize_email};

/// Provider-neutral subset of an externally verified profile.
///
/// Only the two fields needed to materialize a local account survive
/// normalization: the primary email and a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedProfile {
    pub email: String,
    pub display_name: String,
}

impl FederatedProfile {
    /// Build a profile from asserted values. The display name is best effort and
    /// falls back to the local part of the email when blank.
    #[track_caller]
    pub fn new(email: &str, display_name: Option<&str>) -> CoreResult<Self> {
        let email = normalize_email(email)?;

        let display_name = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => email
                .split_once('@')
                .map(|(local, _)| local.to_string())
                .unwrap_or_else(|| email.clone()),
        };

        Ok(Self {
            email,
            display_name,
        })
    }
}
