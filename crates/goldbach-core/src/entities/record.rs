use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An unordered prime decomposition `n = p + q` with `p <= q`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PrimePair {
    pub p: u64,
    pub q: u64,
}

/// Outcome of checking a single even number. Immutable once emitted.
///
/// `first_pair` is the decomposition with the lowest `p`;
/// `representation_count` is the exact number of unordered decompositions.
/// A record with `verified = false` for an in-scope even number is a
/// counterexample, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerificationRecord {
    pub n: u64,
    pub verified: bool,
    pub representation_count: u64,
    pub first_pair: Option<PrimePair>,
}

impl VerificationRecord {
    /// Record for a number outside Goldbach scope (odd or below 4).
    #[must_use]
    pub const fn out_of_scope(n: u64) -> Self {
        Self {
            n,
            verified: false,
            representation_count: 0,
            first_pair: None,
        }
    }
}
