//! # goldbach-report
//!
//! Peripheral plumbing around the verification engine's output: canonical
//! JSON rendering with deterministic key order, SHA-256 integrity sealing,
//! report persistence with a companion hash summary, and optional JSONL
//! streaming of full per-number records.
//!
//! Everything here consumes the report types from `goldbach-core`; nothing
//! feeds back into the engine.

mod canonical;
mod error;
mod integrity;
mod persist;
mod stream;

pub use canonical::{sha256_hex, to_canonical_json, to_canonical_json_pretty};
pub use error::ReportError;
pub use integrity::{seal_document, verify_document};
pub use persist::{ReportPaths, write_report};
pub use stream::RecordWriter;
