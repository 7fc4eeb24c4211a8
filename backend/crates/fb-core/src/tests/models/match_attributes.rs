use crate::MatchAttributes;

#[test]
fn test_new_normalizes_and_deduplicates_tags() {
    let attributes = MatchAttributes::new(["Yoga", " yoga ", "", "Running"], " Loss ");

    assert_eq!(attributes.preferences.len(), 2);
    assert!(attributes.preferences.contains("yoga"));
    assert!(attributes.preferences.contains("running"));
    assert_eq!(attributes.goal, "loss");
}

#[test]
fn test_shared_preference_and_same_goal_is_compatible() {
    let a = MatchAttributes::new(["yoga", "running"], "loss");
    let b = MatchAttributes::new(["running"], "loss");

    assert!(a.is_compatible_with(&b));
    assert!(b.is_compatible_with(&a));
}

#[test]
fn test_different_goal_is_not_compatible() {
    let a = MatchAttributes::new(["running"], "loss");
    let b = MatchAttributes::new(["running"], "gain");

    assert!(a.shares_preference_with(&b));
    assert!(!a.is_compatible_with(&b));
}

#[test]
fn test_disjoint_preferences_are_not_compatible() {
    let a = MatchAttributes::new(["yoga"], "loss");
    let b = MatchAttributes::new(["swimming"], "loss");

    assert!(!a.is_compatible_with(&b));
}

#[test]
fn test_empty_goals_match_each_other() {
    let a = MatchAttributes::new(["yoga"], "");
    let b = MatchAttributes::new(["yoga"], "  ");

    assert!(!a.has_goal());
    assert!(a.is_compatible_with(&b));
}

#[test]
fn test_no_preferences_matches_nobody() {
    let empty = MatchAttributes::default();
    let other = MatchAttributes::new(["yoga"], "");

    assert!(!empty.is_compatible_with(&other));
    assert!(!empty.is_compatible_with(&empty));
}
