use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Attributes the buddy matcher compares between users.
///
/// Tags and goal are stored trimmed and lowercased. An empty goal means "unset"
/// and compares equal to every other unset goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAttributes {
    pub preferences: BTreeSet<String>,
    pub goal: String,
}

impl MatchAttributes {
    pub fn new<I, S>(preferences: I, goal: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            preferences: preferences
                .into_iter()
                .map(|tag| normalize_tag(tag.as_ref()))
                .filter(|tag| !tag.is_empty())
                .collect(),
            goal: normalize_tag(goal),
        }
    }

    pub fn has_goal(&self) -> bool {
        !self.goal.is_empty()
    }

    pub fn shares_preference_with(&self, other: &MatchAttributes) -> bool {
        !self.preferences.is_disjoint(&other.preferences)
    }

    /// Two users are buddies when at least one preference overlaps and the goals
    /// are identical.
    pub fn is_compatible_with(&self, other: &MatchAttributes) -> bool {
        self.goal == other.goal && self.shares_preference_with(other)
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}
