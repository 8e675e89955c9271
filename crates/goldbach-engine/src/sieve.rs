//! Prime generation via the sieve of Eratosthenes.

use std::time::Instant;

use crate::error::EngineError;

/// Immutable prime membership structure over `[0, limit]`.
///
/// Owns both the boolean membership table (O(1) [`contains`]) and the
/// ascending list of primes, so range scans iterate candidates without
/// re-deriving ordering. Built once, never written to afterward; the
/// verifier borrows it read-only, which also makes it safe to share
/// across worker threads by reference.
///
/// [`contains`]: PrimeSet::contains
#[derive(Debug, Clone)]
pub struct PrimeSet {
    limit: u64,
    table: Vec<bool>,
    primes: Vec<u64>,
}

impl PrimeSet {
    /// Run the sieve up to `limit` inclusive.
    ///
    /// Deterministic: identical output for identical `limit` on every run.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidBound`] when `limit < 2`;
    /// [`EngineError::ResourceExhaustion`] when the membership table or
    /// prime list cannot be allocated.
    pub fn generate(limit: u64) -> Result<Self, EngineError> {
        if limit < 2 {
            return Err(EngineError::InvalidBound { bound: limit });
        }

        let started = Instant::now();
        let table = sieve_table(limit)?;

        let count = table.iter().filter(|&&is_prime| is_prime).count();
        let mut primes = Vec::new();
        primes
            .try_reserve_exact(count)
            .map_err(|_| EngineError::ResourceExhaustion {
                bytes: (count as u64).saturating_mul(8),
            })?;
        for (i, &is_prime) in table.iter().enumerate() {
            if is_prime {
                primes.push(i as u64);
            }
        }

        tracing::debug!(
            limit,
            primes = primes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sieve complete"
        );

        Ok(Self {
            limit,
            table,
            primes,
        })
    }

    /// Inclusive upper bound the set was generated for.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// O(1) primality membership. Values above `limit` are not members.
    #[must_use]
    pub fn contains(&self, x: u64) -> bool {
        usize::try_from(x)
            .ok()
            .and_then(|i| self.table.get(i).copied())
            .unwrap_or(false)
    }

    /// Number of primes in `[2, limit]`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Largest prime in the set.
    #[must_use]
    pub fn largest(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    /// Primes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.primes.iter().copied()
    }

    /// Ascending slice of all primes `<= cap`.
    #[must_use]
    pub fn primes_up_to(&self, cap: u64) -> &[u64] {
        let cut = self.primes.partition_point(|&p| p <= cap);
        &self.primes[..cut]
    }
}

/// Enumerate the exact set of primes in `[2, bound]`.
///
/// # Errors
///
/// See [`PrimeSet::generate`].
pub fn generate_primes(bound: u64) -> Result<PrimeSet, EngineError> {
    PrimeSet::generate(bound)
}

/// Classic Eratosthenes table over `[0, limit]`: indices 0 and 1 start
/// non-prime; for each surviving `i` up to `sqrt(limit)`, multiples are
/// cleared from `i * i` stepping by `i`.
///
/// Total over any limit: a limit below 2 yields a table with no primes.
fn sieve_table(limit: u64) -> Result<Vec<bool>, EngineError> {
    let len = usize::try_from(limit)
        .ok()
        .and_then(|l| l.checked_add(1))
        .ok_or(EngineError::ResourceExhaustion {
            bytes: limit.saturating_add(1),
        })?;

    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| EngineError::ResourceExhaustion { bytes: len as u64 })?;
    table.resize(len, true);

    if len > 0 {
        table[0] = false;
    }
    if len > 1 {
        table[1] = false;
    }

    let sqrt = (len - 1).isqrt();
    for i in 2..=sqrt {
        if table[i] {
            let mut j = i * i;
            while j < len {
                table[j] = false;
                j += i;
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Trusted trial-division predicate for cross-checking the sieve.
    fn is_prime_naive(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn matches_trial_division_up_to_five_thousand() {
        let primes = PrimeSet::generate(5000).expect("sieve should run");
        for x in 0..=5000 {
            assert_eq!(
                primes.contains(x),
                is_prime_naive(x),
                "membership disagrees at {x}"
            );
        }
    }

    #[test]
    fn smallest_valid_bounds() {
        let two = PrimeSet::generate(2).expect("bound 2 is valid");
        assert_eq!(two.iter().collect::<Vec<_>>(), vec![2]);

        let three = PrimeSet::generate(3).expect("bound 3 is valid");
        assert_eq!(three.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn rejects_bounds_below_two() {
        for bound in [0, 1] {
            let err = PrimeSet::generate(bound).expect_err("bound below 2 must be rejected");
            assert!(matches!(err, EngineError::InvalidBound { bound: b } if b == bound));
        }
    }

    #[test]
    fn sieve_table_is_total_below_two() {
        assert_eq!(sieve_table(0).expect("total"), vec![false]);
        assert_eq!(sieve_table(1).expect("total"), vec![false, false]);
    }

    #[test]
    fn prime_counting_checkpoints() {
        // pi(10) = 4, pi(100) = 25, pi(1000) = 168
        assert_eq!(PrimeSet::generate(10).unwrap().len(), 4);
        assert_eq!(PrimeSet::generate(100).unwrap().len(), 25);
        assert_eq!(PrimeSet::generate(1000).unwrap().len(), 168);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = PrimeSet::generate(2500).expect("sieve should run");
        let b = PrimeSet::generate(2500).expect("sieve should run");
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }

    #[test]
    fn membership_is_false_beyond_limit() {
        let primes = PrimeSet::generate(10).expect("sieve should run");
        assert!(!primes.contains(11));
        assert!(!primes.contains(13));
    }

    #[test]
    fn primes_up_to_respects_inclusive_cap() {
        let primes = PrimeSet::generate(20).expect("sieve should run");
        assert_eq!(primes.primes_up_to(5), &[2, 3, 5]);
        assert_eq!(primes.primes_up_to(6), &[2, 3, 5]);
        assert_eq!(primes.primes_up_to(1), &[] as &[u64]);
    }

    #[test]
    fn largest_tracks_the_top_prime() {
        let primes = PrimeSet::generate(20).expect("sieve should run");
        assert_eq!(primes.largest(), Some(19));
    }
}
