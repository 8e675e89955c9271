//! Verification range configuration.

use serde::{Deserialize, Serialize};

/// Default inclusive verification bound.
const fn default_bound() -> u64 {
    1_000_000
}

/// Smallest Goldbach number.
const fn default_start() -> u64 {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Inclusive upper bound for prime generation and verification.
    #[serde(default = "default_bound")]
    pub bound: u64,

    /// First even number to verify.
    #[serde(default = "default_start")]
    pub start: u64,

    /// Last even number to verify; 0 means "up to bound".
    #[serde(default)]
    pub end: u64,
}

impl VerifyConfig {
    /// Effective end of the range, resolving the 0 sentinel.
    #[must_use]
    pub const fn effective_end(&self) -> u64 {
        if self.end == 0 { self.bound } else { self.end }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            bound: default_bound(),
            start: default_start(),
            end: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_sentinel_resolves_to_bound() {
        let config = VerifyConfig::default();
        assert_eq!(config.effective_end(), 1_000_000);

        let explicit = VerifyConfig {
            end: 5000,
            ..VerifyConfig::default()
        };
        assert_eq!(explicit.effective_end(), 5000);
    }
}
