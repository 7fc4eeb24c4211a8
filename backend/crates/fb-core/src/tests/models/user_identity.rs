use crate::{FederatedProfile, UserIdentity};

use chrono::Timelike;
use googletest::prelude::*;

#[test]
fn given_new_local_identity_then_created_at_has_whole_second_precision() {
    let user = UserIdentity::new_local(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "hash".to_string(),
    );

    assert_that!(user.created_at.nanosecond(), eq(0));
}

#[test]
fn given_new_federated_identity_then_created_at_has_whole_second_precision() {
    let profile = FederatedProfile::new("bob@example.com", Some("Bob")).unwrap();

    let user = UserIdentity::new_federated(&profile);

    assert_that!(user.created_at.nanosecond(), eq(0));
    assert_that!(user.email, eq("bob@example.com"));
}
