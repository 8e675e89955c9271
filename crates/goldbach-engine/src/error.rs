//! Engine error types.
//!
//! Structural input errors are raised before any computation starts;
//! per-number outcomes (success or counterexample) are never errors and
//! always land in the report instead.

use thiserror::Error;

/// Failures the engine can raise.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Sieve bound too small to contain any prime.
    #[error("invalid bound {bound}: prime generation requires a bound of at least 2")]
    InvalidBound { bound: u64 },

    /// Verification range violates the even-range contract.
    #[error("invalid range [{start}, {end}]: {reason}")]
    InvalidRange {
        start: u64,
        end: u64,
        reason: String,
    },

    /// Sieve table or prime list could not be allocated.
    #[error("resource exhaustion: failed to allocate {bytes} bytes")]
    ResourceExhaustion { bytes: u64 },
}
