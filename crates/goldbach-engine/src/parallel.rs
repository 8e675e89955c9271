//! Static range sharding across rayon workers.
//!
//! The prime set is shared by immutable reference; each shard owns its
//! builder, and partials merge in ascending shard order, so the failure
//! list and sample map come out identical to a sequential scan no matter
//! which shard finishes first. Only the observer counters are shared, as
//! atomics.

use std::time::Instant;

use rayon::prelude::*;

use crate::aggregate::ReportBuilder;
use crate::sieve::PrimeSet;
use crate::verify::{ProgressObserver, ScanCounters, VerifyOptions, scan_chunk};

#[allow(clippy::too_many_arguments)]
pub(crate) fn scan_sharded<O: ProgressObserver>(
    primes: &PrimeSet,
    start: u64,
    end: u64,
    options: &VerifyOptions,
    observer: &O,
    counters: &ScanCounters,
    started: Instant,
) -> ReportBuilder {
    let shards = shard_ranges(start, end, options.threads);
    tracing::debug!(shards = shards.len(), "sharding verification range");

    let partials: Vec<ReportBuilder> = shards
        .into_par_iter()
        .map(|(lo, hi)| {
            let mut builder = ReportBuilder::new(lo, hi, options.sample_interval);
            scan_chunk(
                primes,
                lo,
                hi,
                options,
                observer,
                counters,
                started,
                &mut builder,
            );
            builder
        })
        .collect();

    let mut merged = ReportBuilder::new(start, end, options.sample_interval);
    for partial in partials {
        merged.absorb(partial);
    }
    merged
}

/// Split the even numbers of `[start, end]` into at most `shards`
/// contiguous sub-ranges, each starting and ending on an even number.
fn shard_ranges(start: u64, end: u64, shards: usize) -> Vec<(u64, u64)> {
    let numbers = (end - start) / 2 + 1;
    let shards = (shards.max(1) as u64).min(numbers);
    let per_shard = numbers / shards;
    let remainder = numbers % shards;

    let mut ranges = Vec::with_capacity(shards as usize);
    let mut lo = start;
    for index in 0..shards {
        let extra = u64::from(index < remainder);
        let count = per_shard + extra;
        let hi = lo + (count - 1) * 2;
        ranges.push((lo, hi));
        lo = hi + 2;
    }
    ranges
}
