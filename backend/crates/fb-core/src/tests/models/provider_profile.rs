use crate::{CoreError, FederatedProfile, Provider};

use serde_json::json;

#[test]
fn test_google_profile_uses_display_name_and_first_email() {
    let payload = json!({
        "displayName": "Alice Smith",
        "emails": [{ "value": "Alice@Example.com" }, { "value": "other@example.com" }]
    });

    let profile = FederatedProfile::from_provider_json(Provider::Google, payload).unwrap();

    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.display_name, "Alice Smith");
}

#[test]
fn test_facebook_profile_joins_given_and_family_name() {
    let payload = json!({
        "id": "1234",
        "name": { "givenName": "Bob", "familyName": "Jones" },
        "emails": [{ "value": "bob@example.com" }]
    });

    let profile = FederatedProfile::from_provider_json(Provider::Facebook, payload).unwrap();

    assert_eq!(profile.display_name, "Bob Jones");
}

#[test]
fn test_missing_name_falls_back_to_email_local_part() {
    let payload = json!({ "emails": [{ "value": "carol@example.com" }] });

    let profile = FederatedProfile::from_provider_json(Provider::Facebook, payload).unwrap();

    assert_eq!(profile.display_name, "carol");
}

#[test]
fn test_profile_without_email_is_rejected() {
    let payload = json!({ "displayName": "No Email", "emails": [] });

    let result = FederatedProfile::from_provider_json(Provider::Google, payload);

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "email", .. })
    ));
}

#[test]
fn test_wrongly_shaped_payload_is_rejected() {
    let payload = json!({ "emails": "not-a-list" });

    let result = FederatedProfile::from_provider_json(Provider::Google, payload);

    assert!(matches!(result, Err(CoreError::ProfileJson { .. })));
}
