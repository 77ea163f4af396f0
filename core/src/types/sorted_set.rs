use serde::{Deserialize, Serialize};

/// A sorted-set member with its score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Z {
    /// Score
    pub score: f64,
    /// Member
    pub member: String,
}

impl Z {
    /// Create a member/score pair.
    pub fn new(score: f64, member: impl Into<String>) -> Self {
        Self {
            score,
            member: member.into(),
        }
    }
}

/// A sorted-set member together with the key it was popped from (`BZPOPMAX`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZWithKey {
    /// Member and score
    pub z: Z,
    /// Source key
    pub key: String,
}
