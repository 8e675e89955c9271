//! Sampling and progress cadence configuration.

use serde::{Deserialize, Serialize};

/// Retain a full sample every this many numbers.
const fn default_sample_interval() -> u64 {
    10_000
}

/// Emit a progress observation every this many numbers.
const fn default_progress_interval() -> u64 {
    50_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SamplingConfig {
    /// Full per-number detail is kept only for n divisible by this;
    /// 0 disables sampling entirely.
    #[serde(default = "default_sample_interval")]
    pub sample_interval: u64,

    /// Progress events fire for n divisible by this; 0 disables them.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_interval: default_sample_interval(),
            progress_interval: default_progress_interval(),
        }
    }
}
