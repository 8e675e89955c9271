//! Runtime configuration.

use serde::{Deserialize, Serialize};

/// Sequential reference scan by default.
const fn default_threads() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// Worker threads for the verification scan; 1 keeps the sequential
    /// reference path.
    #[serde(default = "default_threads")]
    pub threads: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sequential() {
        assert_eq!(RuntimeConfig::default().threads, 1);
    }
}
