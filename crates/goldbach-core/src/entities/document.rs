use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::report::AggregateReport;

/// Provenance block attached to every persisted report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportMetadata {
    pub tool: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub bound: u64,
    pub algorithm: String,
}

/// Envelope handed to serialization and persistence.
///
/// `integrity_hash` is absent until the document is sealed; the hash is
/// computed over the canonical serialization with the field omitted, then
/// embedded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportDocument {
    pub metadata: ReportMetadata,
    pub report: AggregateReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity_hash: Option<String>,
}
