//! Goldbach partitions of the even numbers in a range.
//!
//! A partition of an even `k` is a pair of primes `(x, k - x)` with `x <= k - x`. The analysis
//! marks the primes once for the whole range and then walks every even number in it.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::GoldbachError, sieve::Sieve, table::PrimeTable};

/// Exclusive upper bound on the range end.
pub const GOLDBACH_UPPER_BOUND: usize = 10_000_000;

/// Smallest even number with a partition.
pub const GOLDBACH_LOWER_BOUND: usize = 4;

/// The partitions of one even number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldbachRow {
    pub even: usize,
    /// Number of unordered prime pairs summing to `even`.
    pub count: usize,
    /// The pair with the smallest first element.
    pub first: (usize, usize),
}

/// Computes the partitions of every even number in `[lo, hi]`.
///
/// An odd `lo` is raised to the next even number. Even numbers without a partition are omitted.
///
/// # Errors
///
/// Returns [`GoldbachError::OutOfRange`] unless `4 <= lo < hi < 10_000_000`.
pub fn goldbach_partitions(lo: usize, hi: usize) -> Result<Vec<GoldbachRow>, GoldbachError> {
    goldbach_partitions_with(&Sieve::default(), lo, hi)
}

/// Like [goldbach_partitions], marking primes with the given [Sieve].
#[instrument(name = "goldbach partitions", level = "debug", skip(sieve))]
pub fn goldbach_partitions_with(
    sieve: &Sieve,
    lo: usize,
    hi: usize,
) -> Result<Vec<GoldbachRow>, GoldbachError> {
    if !(GOLDBACH_LOWER_BOUND <= lo && lo < hi && hi < GOLDBACH_UPPER_BOUND) {
        return Err(GoldbachError::OutOfRange { lo, hi, upper: GOLDBACH_UPPER_BOUND });
    }
    let lo = lo + lo % 2;

    let table = sieve.table(hi + 1)?;
    let rows = (lo..=hi)
        .step_by(2)
        .filter_map(|even| partition_row(&table, even))
        .collect::<Vec<_>>();
    tracing::debug!(rows = rows.len(), "partitions counted");
    Ok(rows)
}

/// Counts the partitions of `even` using a table that covers it.
///
/// Returns zero when `even` is outside the table.
pub fn count_partitions(table: &PrimeTable, even: usize) -> usize {
    partition_row(table, even).map_or(0, |row| row.count)
}

fn partition_row(table: &PrimeTable, even: usize) -> Option<GoldbachRow> {
    if even >= table.len() {
        return None;
    }
    let mut pairs = (2..=even / 2).filter(|&x| table.is_prime(x) && table.is_prime(even - x));
    let first = pairs.next()?;
    Some(GoldbachRow { even, count: 1 + pairs.count(), first: (first, even - first) })
}
