//! Report output configuration.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    String::from("goldbach-out")
}

fn default_stem() -> String {
    String::from("goldbach-report")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory the report and hash summary are written into.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// File stem: `<stem>.json`, `<stem>.hash.txt`,
    /// `<stem>.records.jsonl`.
    #[serde(default = "default_stem")]
    pub stem: String,

    /// Stream every per-number record to a JSONL file alongside the
    /// report.
    #[serde(default)]
    pub stream_records: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            stem: default_stem(),
            stream_records: false,
        }
    }
}
