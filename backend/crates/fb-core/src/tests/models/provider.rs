use crate::Provider;

use std::str::FromStr;

#[test]
fn test_provider_as_str() {
    assert_eq!(Provider::Google.as_str(), "google");
    assert_eq!(Provider::Facebook.as_str(), "facebook");
}

#[test]
fn test_provider_from_str_is_case_insensitive() {
    assert_eq!(Provider::from_str("Google").unwrap(), Provider::Google);
    assert_eq!(Provider::from_str("FACEBOOK").unwrap(), Provider::Facebook);
    assert!(Provider::from_str("myspace").is_err());
}
