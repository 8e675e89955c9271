//! Pairwise Goldbach verification over a contiguous even range.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use goldbach_core::entities::{AggregateReport, PrimePair, VerificationRecord};

use crate::aggregate::ReportBuilder;
use crate::error::EngineError;
use crate::parallel;
use crate::sieve::PrimeSet;

/// Tuning knobs for a range verification.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Retain a full sample for every n divisible by this (0 disables).
    pub sample_interval: u64,
    /// Emit a progress event for every n divisible by this (0 disables).
    pub progress_interval: u64,
    /// Worker threads; 1 keeps the reference sequential scan.
    pub threads: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            sample_interval: 10_000,
            progress_interval: 50_000,
            threads: 1,
        }
    }
}

/// Counters handed to a progress observer. Side channel only; never part
/// of the correctness contract.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub last_n: u64,
    pub processed: u64,
    pub successes: u64,
    pub failures: u64,
    pub per_second: f64,
}

/// Fire-and-forget observation hooks invoked from the scan loop.
///
/// Implementations must not block; in parallel runs they are called from
/// multiple workers concurrently.
pub trait ProgressObserver: Sync {
    /// Called for every n divisible by the configured progress interval.
    fn on_progress(&self, event: &ProgressEvent);

    /// Called with every record, for callers that stream them out before
    /// the record is folded into the aggregate and discarded.
    fn on_record(&self, _record: &VerificationRecord) {}
}

/// Observer that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

/// Shared scan counters feeding the observer. In parallel runs these are
/// the only state crossing shard boundaries.
#[derive(Debug, Default)]
pub(crate) struct ScanCounters {
    pub(crate) processed: AtomicU64,
    pub(crate) successes: AtomicU64,
    pub(crate) failures: AtomicU64,
}

/// Check a single even number against the prime set.
///
/// Candidates p are scanned in ascending order while `p <= n / 2`; the
/// boundary is inclusive, so for even n with prime n / 2 the pair
/// `(n / 2, n / 2)` is counted. The first hit (lowest p) becomes
/// `first_pair`; the scan continues to an exact representation count.
///
/// Odd n and n below 4 are out of Goldbach scope and yield an unverified
/// record with a zero count; the range scan never visits them.
#[must_use]
pub fn check_even(primes: &PrimeSet, n: u64) -> VerificationRecord {
    if n < 4 || n % 2 != 0 {
        return VerificationRecord::out_of_scope(n);
    }

    let mut count = 0;
    let mut first_pair = None;
    for &p in primes.primes_up_to(n / 2) {
        let q = n - p;
        if primes.contains(q) {
            if first_pair.is_none() {
                first_pair = Some(PrimePair { p, q });
            }
            count += 1;
        }
    }

    VerificationRecord {
        n,
        verified: count > 0,
        representation_count: count,
        first_pair,
    }
}

/// Verify every even n in `[start, end]` against the prime set.
///
/// The prime set is borrowed read-only for the whole pass. One record is
/// produced per number and folded into the aggregate immediately; only
/// samples on fixed intervals are retained in full. A counterexample is
/// recorded and the scan continues.
///
/// With `options.threads > 1` the range is statically sharded across
/// rayon workers and partial aggregates merge in ascending shard order,
/// so the report is identical to the sequential one apart from the
/// performance block.
///
/// # Errors
///
/// [`EngineError::InvalidRange`] when the contract is violated
/// (`4 <= start <= end <= primes.limit()`, both endpoints even); nothing
/// is scanned in that case.
pub fn verify_range<O: ProgressObserver>(
    primes: &PrimeSet,
    start: u64,
    end: u64,
    options: &VerifyOptions,
    observer: &O,
) -> Result<AggregateReport, EngineError> {
    validate_range(primes, start, end)?;

    let started = Instant::now();
    let counters = ScanCounters::default();

    let builder = if options.threads > 1 {
        parallel::scan_sharded(primes, start, end, options, observer, &counters, started)
    } else {
        let mut builder = ReportBuilder::new(start, end, options.sample_interval);
        scan_chunk(
            primes,
            start,
            end,
            options,
            observer,
            &counters,
            started,
            &mut builder,
        );
        builder
    };

    let report = builder.finish(started.elapsed());
    tracing::debug!(
        start,
        end,
        total = report.total_numbers,
        failures = report.failures.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "range verification complete"
    );
    Ok(report)
}

/// Scan one contiguous even sub-range into `builder`, updating the shared
/// counters and firing observer hooks along the way.
#[allow(clippy::too_many_arguments)]
pub(crate) fn scan_chunk<O: ProgressObserver>(
    primes: &PrimeSet,
    lo: u64,
    hi: u64,
    options: &VerifyOptions,
    observer: &O,
    counters: &ScanCounters,
    started: Instant,
    builder: &mut ReportBuilder,
) {
    let mut n = lo;
    while n <= hi {
        let record = check_even(primes, n);

        if record.verified {
            counters.successes.fetch_add(1, Ordering::Relaxed);
        } else {
            counters.failures.fetch_add(1, Ordering::Relaxed);
        }
        let processed = counters.processed.fetch_add(1, Ordering::Relaxed) + 1;

        observer.on_record(&record);
        builder.record(&record);

        if options.progress_interval > 0 && n % options.progress_interval == 0 {
            let elapsed = started.elapsed().as_secs_f64();
            let per_second = if elapsed > 0.0 {
                processed as f64 / elapsed
            } else {
                0.0
            };
            observer.on_progress(&ProgressEvent {
                last_n: n,
                processed,
                successes: counters.successes.load(Ordering::Relaxed),
                failures: counters.failures.load(Ordering::Relaxed),
                per_second,
            });
        }

        n += 2;
    }
}

fn validate_range(primes: &PrimeSet, start: u64, end: u64) -> Result<(), EngineError> {
    let reject = |reason: &str| {
        Err(EngineError::InvalidRange {
            start,
            end,
            reason: reason.to_string(),
        })
    };

    if start % 2 != 0 {
        return reject("start is odd");
    }
    if end % 2 != 0 {
        return reject("end is odd");
    }
    if start < 4 {
        return reject("start is below 4, the smallest Goldbach number");
    }
    if start > end {
        return reject("start exceeds end");
    }
    if end > primes.limit() {
        return reject("end exceeds the sieve limit");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sieve::generate_primes;

    #[test]
    fn out_of_scope_numbers_yield_unverified_records() {
        let primes = generate_primes(100).expect("sieve should run");
        for n in [0, 1, 2, 3, 7, 99] {
            let record = check_even(&primes, n);
            assert!(!record.verified, "n = {n} must be out of scope");
            assert_eq!(record.representation_count, 0);
            assert_eq!(record.first_pair, None);
        }
    }

    #[test]
    fn half_boundary_pair_is_counted() {
        // n = 10: pairs (3, 7) and (5, 5); p = 5 = n / 2 is included.
        let primes = generate_primes(10).expect("sieve should run");
        let record = check_even(&primes, 10);
        assert!(record.verified);
        assert_eq!(record.representation_count, 2);
        assert_eq!(record.first_pair, Some(PrimePair { p: 3, q: 7 }));
    }

    #[test]
    fn first_pair_has_minimal_p() {
        let primes = generate_primes(100).expect("sieve should run");
        let record = check_even(&primes, 22);
        // (3, 19), (5, 17), (11, 11)
        assert_eq!(record.first_pair, Some(PrimePair { p: 3, q: 19 }));
        assert_eq!(record.representation_count, 3);
    }

    #[test]
    fn malformed_ranges_are_rejected_before_scanning() {
        let primes = generate_primes(100).expect("sieve should run");
        let cases = [
            (5, 10, "start is odd"),
            (4, 9, "end is odd"),
            (2, 10, "start is below 4"),
            (20, 10, "start exceeds end"),
            (4, 102, "end exceeds the sieve limit"),
        ];
        for (start, end, fragment) in cases {
            let err = verify_range(&primes, start, end, &VerifyOptions::default(), &NullObserver)
                .expect_err("range must be rejected");
            match err {
                EngineError::InvalidRange { reason, .. } => {
                    assert!(
                        reason.contains(fragment),
                        "[{start}, {end}]: expected '{fragment}' in '{reason}'"
                    );
                }
                other => panic!("unexpected error for [{start}, {end}]: {other}"),
            }
        }
    }
}
