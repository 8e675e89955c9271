//! Hash-then-embed integrity sealing for report documents.
//!
//! The hash covers the canonical pretty serialization of the document
//! with the hash field absent; sealing embeds it, verification re-derives
//! it the same way and compares.

use goldbach_core::entities::ReportDocument;

use crate::canonical::{sha256_hex, to_canonical_json_pretty};
use crate::error::ReportError;

/// Compute and embed the document's integrity hash.
///
/// Any previously embedded hash is discarded and recomputed.
///
/// # Errors
///
/// Propagates serialization failures.
pub fn seal_document(mut document: ReportDocument) -> Result<ReportDocument, ReportError> {
    document.integrity_hash = None;
    let canonical = to_canonical_json_pretty(&document)?;
    document.integrity_hash = Some(sha256_hex(canonical.as_bytes()));
    Ok(document)
}

/// Re-derive the hash and compare against the embedded value.
///
/// Returns false for an unsealed document.
///
/// # Errors
///
/// Propagates serialization failures.
pub fn verify_document(document: &ReportDocument) -> Result<bool, ReportError> {
    let Some(expected) = &document.integrity_hash else {
        return Ok(false);
    };
    let mut unsealed = document.clone();
    unsealed.integrity_hash = None;
    let canonical = to_canonical_json_pretty(&unsealed)?;
    Ok(sha256_hex(canonical.as_bytes()) == *expected)
}
