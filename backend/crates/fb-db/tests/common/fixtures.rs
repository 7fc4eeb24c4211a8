use fb_core::{FederatedProfile, MatchAttributes, UserIdentity};

/// Creates a local account with a placeholder hash
pub fn create_test_user(name: &str, email: &str) -> UserIdentity {
    UserIdentity::new_local(
        name.to_string(),
        email.to_string(),
        "$2b$04$placeholderplaceholderplaceholderplaceholderplace".to_string(),
    )
}

/// Creates a local account with the given matching attributes
pub fn create_test_user_with_attributes(
    name: &str,
    preferences: &[&str],
    goal: &str,
) -> UserIdentity {
    let mut user = create_test_user(name, &format!("{}@example.com", name.to_lowercase()));
    user.attributes = MatchAttributes::new(preferences.iter().copied(), goal);
    user
}

/// Creates a federated-only account
pub fn create_federated_user(email: &str) -> UserIdentity {
    let profile = FederatedProfile::new(email, Some("Federated User")).unwrap();
    UserIdentity::new_federated(&profile)
}
