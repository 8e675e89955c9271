//! CLI response types returned as JSON by `goldbach` commands.
//!
//! These structs define the shape of JSON output for `goldbach run`,
//! `goldbach primes`, and `goldbach check`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ReportDocument, VerificationRecord};

/// Response from `goldbach run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RunResponse {
    pub report_path: Option<String>,
    pub hash_path: Option<String>,
    pub records_path: Option<String>,
    pub document: ReportDocument,
}

/// Response from `goldbach primes`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PrimesResponse {
    pub bound: u64,
    pub count: u64,
    pub largest: Option<u64>,
    /// Leading primes, capped by the `--head` flag.
    pub head: Vec<u64>,
}

/// Response from `goldbach check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResponse {
    /// False when `n` is odd or below 4; such numbers are skipped, not
    /// counted as failures.
    pub in_scope: bool,
    pub record: VerificationRecord,
}
