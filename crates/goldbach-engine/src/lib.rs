//! # goldbach-engine
//!
//! Prime generation and pairwise Goldbach verification.
//!
//! Two components, strictly ordered by data dependency: the sieve runs
//! once to completion and yields an immutable [`PrimeSet`]; the verifier
//! then scans a contiguous even range against it read-only, producing one
//! [`goldbach_core::entities::VerificationRecord`] per number and an
//! [`goldbach_core::entities::AggregateReport`] summarizing them.
//!
//! Counterexamples are recorded outcomes, never errors: the scan keeps
//! going. The only fatal conditions are malformed input and allocation
//! failure.

mod aggregate;
mod parallel;

pub mod error;
pub mod sieve;
pub mod verify;

pub use error::EngineError;
pub use sieve::{PrimeSet, generate_primes};
pub use verify::{
    NullObserver, ProgressEvent, ProgressObserver, VerifyOptions, check_even, verify_range,
};
