//! Canonical JSON rendering and content hashing.
//!
//! Serialization goes through `serde_json::Value`, whose object map keeps
//! keys sorted, so the same document always produces byte-identical JSON
//! and therefore a stable content hash.

use std::fmt::Write as _;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ReportError;

/// Serialize with deterministic (sorted) object key order, single line.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    let value = serde_json::to_value(value)?;
    serde_json::to_string(&value).map_err(ReportError::from)
}

/// Serialize with deterministic key order, pretty-printed. This is the
/// form that gets hashed and written to disk.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn to_canonical_json_pretty<T: Serialize>(value: &T) -> Result<String, ReportError> {
    let value = serde_json::to_value(value)?;
    serde_json::to_string_pretty(&value).map_err(ReportError::from)
}

/// Lowercase 64-character hex SHA-256 of `data`.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(64);
    for byte in digest {
        write!(&mut hex, "{byte:02x}").unwrap();
    }
    hex
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Unsorted {
        zebra: u32,
        apple: u32,
        mango: u32,
    }

    #[test]
    fn keys_come_out_sorted() {
        let value = Unsorted {
            zebra: 1,
            apple: 2,
            mango: 3,
        };
        let json = to_canonical_json(&value).expect("serialization should work");
        assert_eq!(json, r#"{"apple":2,"mango":3,"zebra":1}"#);
    }

    #[test]
    fn hash_is_64_char_hex() {
        let hash = sha256_hex(b"goldbach");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hash_matches_known_vector() {
        // sha256 of the empty string
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn identical_values_hash_identically() {
        let a = to_canonical_json_pretty(&Unsorted {
            zebra: 1,
            apple: 2,
            mango: 3,
        })
        .expect("serialization should work");
        let b = to_canonical_json_pretty(&Unsorted {
            zebra: 1,
            apple: 2,
            mango: 3,
        })
        .expect("serialization should work");
        assert_eq!(sha256_hex(a.as_bytes()), sha256_hex(b.as_bytes()));
    }
}
