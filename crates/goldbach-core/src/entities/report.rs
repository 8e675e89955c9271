use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::record::PrimePair;

/// Inclusive range of even numbers covered by a report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerifiedRange {
    pub start: u64,
    pub end: u64,
}

/// Spread of decomposition counts across the successful numbers.
///
/// All three fields are 0 when the range produced no successes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RepresentationStats {
    pub min_representations: u64,
    pub max_representations: u64,
    pub avg_representations: f64,
}

/// Full detail retained for a number on a sampling boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PairSample {
    pub first_pair: PrimePair,
    pub total_pairs: u64,
}

/// Wall-clock figures for a completed scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Performance {
    pub elapsed_seconds: f64,
    pub numbers_per_second: f64,
    pub success_rate: f64,
}

/// Terminal artifact of a range verification.
///
/// Built incrementally while the scan runs, finalized once the range is
/// exhausted. `failures` lists counterexamples in ascending order;
/// `samples` keeps per-number detail only at fixed n-intervals so memory
/// stays bounded for large ranges. The `BTreeMap` keeps serialized sample
/// keys in ascending order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AggregateReport {
    pub range: VerifiedRange,
    pub total_numbers: u64,
    pub successful_verifications: u64,
    pub failures: Vec<u64>,
    pub total_representations: u64,
    pub statistics: RepresentationStats,
    pub samples: BTreeMap<u64, PairSample>,
    pub performance: Performance,
}

impl AggregateReport {
    /// True when every scanned number had at least one decomposition.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
