use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, setup_valid_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_no_jwt_secret_when_validate_then_error_mentions_jwt_secret() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("FB_AUTH_JWT_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("jwt_secret"));
}

#[test]
#[serial]
fn given_jwt_secret_too_short_when_validate_then_error_mentions_32_characters() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("FB_AUTH_JWT_SECRET", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32 characters"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("FB_AUTH_JWT_SECRET", "12345678901234567890123456789012");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_ttl_out_of_range_when_validate_then_error() {
    for ttl in ["59", "86401"] {
        // Given
        let (_temp, _dir, _secret) = setup_valid_config_dir();
        let _ttl = EnvGuard::set("FB_AUTH_TOKEN_TTL_SECS", ttl);

        // When
        let result = Config::load().unwrap().validate();

        // Then
        assert_that!(result, err(anything()));
        let err_msg = format!("{}", result.unwrap_err());
        assert_that!(err_msg, contains_substring("token_ttl_secs"));
    }
}

#[test]
#[serial]
fn given_ttl_at_bounds_when_validate_then_ok() {
    for ttl in ["60", "86400"] {
        let (_temp, _dir, _secret) = setup_valid_config_dir();
        let _ttl = EnvGuard::set("FB_AUTH_TOKEN_TTL_SECS", ttl);

        let result = Config::load().unwrap().validate();

        assert_that!(result, ok(anything()));
    }
}

#[test]
#[serial]
fn given_bcrypt_cost_out_of_range_when_validate_then_error() {
    for cost in ["3", "32"] {
        // Given
        let (_temp, _dir, _secret) = setup_valid_config_dir();
        let _cost = EnvGuard::set("FB_AUTH_BCRYPT_COST", cost);

        // When
        let result = Config::load().unwrap().validate();

        // Then
        assert_that!(result, err(anything()));
        let err_msg = format!("{}", result.unwrap_err());
        assert_that!(err_msg, contains_substring("bcrypt_cost"));
    }
}
