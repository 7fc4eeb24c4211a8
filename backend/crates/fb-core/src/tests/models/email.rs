use crate::{CoreError, normalize_email};

#[test]
fn test_normalize_email_trims_and_lowercases() {
    assert_eq!(
        normalize_email("  Alice.Smith@Example.COM ").unwrap(),
        "alice.smith@example.com"
    );
}

#[test]
fn test_normalize_email_rejects_empty() {
    assert!(matches!(
        normalize_email("   "),
        Err(CoreError::Validation { field: "email", .. })
    ));
}

#[test]
fn test_normalize_email_rejects_missing_parts() {
    assert!(normalize_email("alice").is_err());
    assert!(normalize_email("@example.com").is_err());
    assert!(normalize_email("alice@").is_err());
    assert!(normalize_email("a@b@c").is_err());
}

#[test]
fn test_normalize_email_rejects_inner_whitespace() {
    assert!(normalize_email("al ice@example.com").is_err());
}
