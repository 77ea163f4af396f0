use serde::{Deserialize, Serialize};

/// A key paired with a value (`HRANDFIELD ... WITHVALUES`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Field or key name
    pub key: String,
    /// Associated value
    pub value: String,
}

/// Result of `LCS`.
///
/// Depending on the query either `match_string`, `len` or `matches` is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcsMatch {
    /// The longest common subsequence itself
    pub match_string: String,
    /// Matched ranges (`IDX`)
    pub matches: Vec<LcsMatchedPosition>,
    /// Length of the subsequence (`LEN` / `IDX`)
    pub len: i64,
}

/// One matched range of an `LCS ... IDX` reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcsMatchedPosition {
    /// Range in the first key
    pub key1: LcsPosition,
    /// Range in the second key
    pub key2: LcsPosition,
    /// Length of the match (`WITHMATCHLEN`)
    pub match_len: i64,
}

/// Inclusive byte range inside a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcsPosition {
    /// First byte
    pub start: i64,
    /// Last byte
    pub end: i64,
}
