//! Incremental aggregation of per-number outcomes into a report.

use std::collections::BTreeMap;
use std::time::Duration;

use goldbach_core::entities::{
    AggregateReport, PairSample, Performance, RepresentationStats, VerificationRecord,
    VerifiedRange,
};

/// Owned accumulator built while a range (or shard) is scanned and
/// returned by value, replacing any process-wide mutable state.
#[derive(Debug)]
pub(crate) struct ReportBuilder {
    start: u64,
    end: u64,
    sample_interval: u64,
    total_numbers: u64,
    successes: u64,
    failures: Vec<u64>,
    total_representations: u64,
    min_representations: Option<u64>,
    max_representations: Option<u64>,
    samples: BTreeMap<u64, PairSample>,
}

impl ReportBuilder {
    pub(crate) fn new(start: u64, end: u64, sample_interval: u64) -> Self {
        Self {
            start,
            end,
            sample_interval,
            total_numbers: 0,
            successes: 0,
            failures: Vec::new(),
            total_representations: 0,
            min_representations: None,
            max_representations: None,
            samples: BTreeMap::new(),
        }
    }

    /// Consume one record. Records must arrive in ascending n order so the
    /// failure list stays sorted without a final sort pass.
    pub(crate) fn record(&mut self, record: &VerificationRecord) {
        if record.verified {
            let count = record.representation_count;
            self.successes += 1;
            self.total_representations += count;
            self.min_representations =
                Some(self.min_representations.map_or(count, |m| m.min(count)));
            self.max_representations =
                Some(self.max_representations.map_or(count, |m| m.max(count)));

            if self.sample_interval > 0
                && record.n % self.sample_interval == 0
                && let Some(pair) = record.first_pair
            {
                self.samples.insert(
                    record.n,
                    PairSample {
                        first_pair: pair,
                        total_pairs: count,
                    },
                );
            }
        } else {
            self.failures.push(record.n);
        }
        self.total_numbers += 1;
    }

    /// Merge a shard's partial aggregate. Callers absorb shards in
    /// ascending range order, which keeps failures and samples sorted.
    pub(crate) fn absorb(&mut self, other: Self) {
        self.total_numbers += other.total_numbers;
        self.successes += other.successes;
        self.failures.extend(other.failures);
        self.total_representations += other.total_representations;
        self.min_representations = merge_min(self.min_representations, other.min_representations);
        self.max_representations = merge_max(self.max_representations, other.max_representations);
        self.samples.extend(other.samples);
    }

    /// Finalize into the terminal report artifact.
    pub(crate) fn finish(self, elapsed: Duration) -> AggregateReport {
        let elapsed_seconds = elapsed.as_secs_f64();
        let avg_representations = if self.successes == 0 {
            0.0
        } else {
            self.total_representations as f64 / self.successes as f64
        };
        let numbers_per_second = if elapsed_seconds > 0.0 {
            self.total_numbers as f64 / elapsed_seconds
        } else {
            0.0
        };
        let success_rate = if self.total_numbers == 0 {
            0.0
        } else {
            self.successes as f64 / self.total_numbers as f64
        };

        AggregateReport {
            range: VerifiedRange {
                start: self.start,
                end: self.end,
            },
            total_numbers: self.total_numbers,
            successful_verifications: self.successes,
            failures: self.failures,
            total_representations: self.total_representations,
            statistics: RepresentationStats {
                min_representations: self.min_representations.unwrap_or(0),
                max_representations: self.max_representations.unwrap_or(0),
                avg_representations,
            },
            samples: self.samples,
            performance: Performance {
                elapsed_seconds,
                numbers_per_second,
                success_rate,
            },
        }
    }
}

fn merge_min(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

fn merge_max(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

#[cfg(test)]
mod tests {
    use goldbach_core::entities::PrimePair;
    use pretty_assertions::assert_eq;

    use super::*;

    fn success(n: u64, count: u64, p: u64) -> VerificationRecord {
        VerificationRecord {
            n,
            verified: true,
            representation_count: count,
            first_pair: Some(PrimePair { p, q: n - p }),
        }
    }

    fn failure(n: u64) -> VerificationRecord {
        VerificationRecord {
            n,
            verified: false,
            representation_count: 0,
            first_pair: None,
        }
    }

    #[test]
    fn accumulates_counts_and_extremes() {
        let mut builder = ReportBuilder::new(4, 10, 0);
        builder.record(&success(4, 1, 2));
        builder.record(&success(6, 1, 3));
        builder.record(&success(8, 1, 3));
        builder.record(&success(10, 2, 3));

        let report = builder.finish(Duration::from_millis(10));
        assert_eq!(report.total_numbers, 4);
        assert_eq!(report.successful_verifications, 4);
        assert_eq!(report.total_representations, 5);
        assert_eq!(report.statistics.min_representations, 1);
        assert_eq!(report.statistics.max_representations, 2);
        assert!((report.statistics.avg_representations - 1.25).abs() < f64::EPSILON);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn failures_are_kept_in_arrival_order() {
        let mut builder = ReportBuilder::new(4, 12, 0);
        builder.record(&failure(6));
        builder.record(&failure(10));
        builder.record(&failure(12));

        let report = builder.finish(Duration::ZERO);
        assert_eq!(report.failures, vec![6, 10, 12]);
        assert_eq!(report.successful_verifications, 0);
    }

    #[test]
    fn statistics_are_zero_without_successes() {
        let report = ReportBuilder::new(4, 4, 0).finish(Duration::ZERO);
        assert_eq!(report.statistics.min_representations, 0);
        assert_eq!(report.statistics.max_representations, 0);
        assert!(report.statistics.avg_representations.abs() < f64::EPSILON);
        assert!(report.performance.success_rate.abs() < f64::EPSILON);
        assert!(report.performance.numbers_per_second.abs() < f64::EPSILON);
    }

    #[test]
    fn samples_only_on_interval_boundaries() {
        let mut builder = ReportBuilder::new(4, 20, 10);
        builder.record(&success(4, 1, 2));
        builder.record(&success(10, 2, 3));
        builder.record(&success(20, 2, 3));

        let report = builder.finish(Duration::ZERO);
        assert_eq!(report.samples.len(), 2);
        assert!(report.samples.contains_key(&10));
        assert!(report.samples.contains_key(&20));
        assert_eq!(report.samples[&10].total_pairs, 2);
    }

    #[test]
    fn absorb_merges_shards_preserving_order() {
        let mut left = ReportBuilder::new(4, 20, 10);
        left.record(&success(4, 1, 2));
        left.record(&failure(6));
        left.record(&success(10, 2, 3));

        let mut right = ReportBuilder::new(12, 20, 10);
        right.record(&failure(14));
        right.record(&success(20, 2, 3));

        left.absorb(right);
        let report = left.finish(Duration::from_millis(5));

        assert_eq!(report.total_numbers, 5);
        assert_eq!(report.successful_verifications, 3);
        assert_eq!(report.failures, vec![6, 14]);
        assert_eq!(report.statistics.min_representations, 1);
        assert_eq!(report.statistics.max_representations, 2);
        assert_eq!(
            report.samples.keys().copied().collect::<Vec<_>>(),
            vec![10, 20]
        );
    }
}
