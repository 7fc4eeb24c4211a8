//! Provider-specific profile payloads.
//!
//! Each provider reports names differently; these types only model the fields
//! needed to produce a [`FederatedProfile`].

use crate::{CoreError, CoreResult, FederatedProfile, Provider};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileEmail {
    pub value: String,
}

/// Google profile as returned by the OAuth 2.0 userinfo mapping
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub emails: Vec<ProfileEmail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookName {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

/// Facebook profile requested with the `id,emails,name` field set
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookProfile {
    #[serde(default)]
    pub name: FacebookName,
    #[serde(default)]
    pub emails: Vec<ProfileEmail>,
}

impl TryFrom<GoogleProfile> for FederatedProfile {
    type Error = CoreError;

    #[track_caller]
    fn try_from(profile: GoogleProfile) -> CoreResult<Self> {
        let email = primary_email(&profile.emails, Provider::Google)?;
        FederatedProfile::new(email, profile.display_name.as_deref())
    }
}

impl TryFrom<FacebookProfile> for FederatedProfile {
    type Error = CoreError;

    #[track_caller]
    fn try_from(profile: FacebookProfile) -> CoreResult<Self> {
        let email = primary_email(&profile.emails, Provider::Facebook)?;
        let full_name = [profile.name.given_name, profile.name.family_name]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        FederatedProfile::new(email, Some(full_name.as_str()))
    }
}

impl FederatedProfile {
    /// Decode a raw provider payload and normalize it
    #[track_caller]
    pub fn from_provider_json(provider: Provider, payload: serde_json::Value) -> CoreResult<Self> {
        let json_error = |source| CoreError::ProfileJson {
            provider: provider.as_str(),
            source,
            location: ErrorLocation::from(Location::caller()),
        };

        match provider {
            Provider::Google => {
                serde_json::from_value::<GoogleProfile>(payload).map_err(json_error)?.try_into()
            }
            Provider::Facebook => {
                serde_json::from_value::<FacebookProfile>(payload).map_err(json_error)?.try_into()
            }
        }
    }
}

#[track_caller]
fn primary_email(emails: &[ProfileEmail], provider: Provider) -> CoreResult<&str> {
    emails
        .first()
        .map(|email| email.value.as_str())
        .ok_or_else(|| CoreError::Validation {
            field: "email",
            message: format!("{} profile did not include an email address", provider),
            location: ErrorLocation::from(Location::caller()),
        })
}
