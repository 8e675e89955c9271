//! Report persistence: the JSON document plus a companion human-readable
//! hash summary, mirroring what operators paste into verification logs.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use goldbach_core::entities::ReportDocument;

use crate::canonical::to_canonical_json_pretty;
use crate::error::ReportError;

/// Locations of the two files a persisted report produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub report: PathBuf,
    pub hash: PathBuf,
}

/// Write `<stem>.json` and `<stem>.hash.txt` under `dir`, creating the
/// directory if needed.
///
/// The document should already be sealed; an unsealed one is written with
/// the hash line reading "unsealed".
///
/// # Errors
///
/// Serialization failures and filesystem errors, each carrying the
/// offending path.
pub fn write_report(
    dir: &Path,
    stem: &str,
    document: &ReportDocument,
) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;

    let report_path = dir.join(format!("{stem}.json"));
    let json = to_canonical_json_pretty(document)?;
    fs::write(&report_path, &json).map_err(|e| ReportError::io(&report_path, e))?;

    let hash_path = dir.join(format!("{stem}.hash.txt"));
    fs::write(&hash_path, hash_summary(document, &report_path))
        .map_err(|e| ReportError::io(&hash_path, e))?;

    tracing::info!(
        report = %report_path.display(),
        hash = %hash_path.display(),
        "report written"
    );

    Ok(ReportPaths {
        report: report_path,
        hash: hash_path,
    })
}

fn hash_summary(document: &ReportDocument, report_path: &Path) -> String {
    let report = &document.report;
    let rule = "=".repeat(60);
    let hash = document.integrity_hash.as_deref().unwrap_or("unsealed");

    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "GOLDBACH VERIFICATION REPORT");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "SHA-256: {hash}");
    let _ = writeln!(out, "File: {}", report_path.display());
    let _ = writeln!(out, "Generated: {}", document.metadata.generated_at.to_rfc3339());
    let _ = writeln!(
        out,
        "Range: {} to {}",
        report.range.start, report.range.end
    );
    let _ = writeln!(out, "Total verified: {}", report.total_numbers);
    let _ = writeln!(
        out,
        "Success rate: {:.8}",
        report.performance.success_rate
    );
    let _ = writeln!(out, "Failures: {}", report.failures.len());
    let _ = writeln!(
        out,
        "Total representations: {}",
        report.total_representations
    );
    let _ = writeln!(
        out,
        "Processing time: {:.2}s",
        report.performance.elapsed_seconds
    );
    let _ = writeln!(
        out,
        "Processing rate: {:.0} numbers/second",
        report.performance.numbers_per_second
    );
    let _ = writeln!(out, "{rule}");
    out
}
