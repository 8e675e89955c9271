//! JSONL streaming of full per-number records.
//!
//! The aggregate keeps only sampled detail; callers that want every
//! record stream them here instead of holding them in memory.

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use goldbach_core::entities::VerificationRecord;
use serde_jsonlines::JsonLinesWriter;

use crate::error::ReportError;

/// Append-only JSONL sink, one line per verification record.
pub struct RecordWriter {
    path: PathBuf,
    inner: JsonLinesWriter<BufWriter<File>>,
}

impl RecordWriter {
    /// Create (truncating) the JSONL file at `path`.
    ///
    /// # Errors
    ///
    /// Filesystem errors carrying the path.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: JsonLinesWriter::new(BufWriter::new(file)),
        })
    }

    /// Append one record as a JSON line.
    ///
    /// # Errors
    ///
    /// Filesystem errors carrying the path.
    pub fn write(&mut self, record: &VerificationRecord) -> Result<(), ReportError> {
        self.inner
            .write(record)
            .map_err(|e| ReportError::io(&self.path, e))
    }

    /// Flush and close the sink.
    ///
    /// # Errors
    ///
    /// Filesystem errors carrying the path.
    pub fn finish(self) -> Result<(), ReportError> {
        let mut writer = self.inner.into_inner();
        writer.flush().map_err(|e| ReportError::io(&self.path, e))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
