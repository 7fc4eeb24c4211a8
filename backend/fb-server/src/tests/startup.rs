use super::TEST_SECRET;
use crate::error::ServerError;
use crate::startup::{auth_settings, build_state};

use fb_config::Config;

use googletest::prelude::*;
use tempfile::TempDir;

fn valid_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config.auth.bcrypt_cost = 4;
    config
}

#[test]
fn given_config_when_mapped_then_auth_settings_follow_it() {
    let mut config = valid_config();
    config.matching.result_cap = 7;
    config.rate_limit.max_requests = 3;

    let settings = auth_settings(&config).unwrap();

    assert_that!(settings.bcrypt_cost, eq(4));
    assert_that!(settings.result_cap, eq(7));
    assert_that!(settings.rate_limit.max_requests, eq(3));
}

#[test]
fn given_missing_secret_when_mapped_then_config_error() {
    let mut config = valid_config();
    config.auth.jwt_secret = None;

    let result = auth_settings(&config);

    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[tokio::test]
async fn given_valid_config_when_building_state_then_database_is_created() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("data").join("fitbuddy.db");

    let state = build_state(&valid_config(), &db_path).await;

    assert!(state.is_ok());
    assert!(db_path.exists());
}

#[tokio::test]
async fn given_out_of_range_bcrypt_cost_when_building_state_then_auth_error() {
    let temp = TempDir::new().unwrap();
    let mut config = valid_config();
    config.auth.bcrypt_cost = 32;

    let result = build_state(&config, &temp.path().join("fitbuddy.db")).await;

    assert!(matches!(result, Err(ServerError::Auth(_))));
}

#[tokio::test]
async fn given_database_parent_is_a_file_when_building_state_then_database_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let result = build_state(&valid_config(), &blocker.join("fitbuddy.db")).await;

    assert!(matches!(result, Err(ServerError::Database(_))));
}
