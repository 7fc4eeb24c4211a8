use crate::Credential;

#[test]
fn test_local_credential_exposes_hash() {
    let credential = Credential::local("$2b$04$abc");
    assert_eq!(credential.password_hash(), Some("$2b$04$abc"));
    assert!(!credential.is_federated_only());
}

#[test]
fn test_federated_credential_has_no_hash() {
    assert_eq!(Credential::FederatedOnly.password_hash(), None);
    assert!(Credential::FederatedOnly.is_federated_only());
}

#[test]
fn test_debug_output_redacts_hash() {
    let rendered = format!("{:?}", Credential::local("$2b$04$secret-hash"));
    assert!(!rendered.contains("secret-hash"));
    assert!(rendered.contains("redacted"));
}
