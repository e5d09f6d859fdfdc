//! Exhaustive enumeration of half-sums, used to cross-check the closed form.

use crate::{BASE, MAX_HALF_SUM, WAYS};
use itertools::iproduct;
use rayon::prelude::*;
use tracing::debug;

/// Histogram indexed by half-sum
pub type Histogram = [i64; MAX_HALF_SUM + 1];

/// A half-sum where the closed form and the enumeration disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub sum: usize,
    pub formula: i64,
    pub enumerated: i64,
}

/// Count the digit sums of all 13^6 halves by visiting each one.
///
/// Work is split across threads by the leading digit; the remaining five
/// digits are walked sequentially.
pub fn half_sum_histogram() -> Histogram {
    let base = BASE as usize;

    (0..base)
        .into_par_iter()
        .map(|lead| {
            let mut histogram = [0; MAX_HALF_SUM + 1];
            for (a, b, c, d, e) in iproduct!(0..base, 0..base, 0..base, 0..base, 0..base) {
                histogram[lead + a + b + c + d + e] += 1;
            }
            debug!(lead, "enumerated halves for leading digit");
            histogram
        })
        .reduce(
            || [0; MAX_HALF_SUM + 1],
            |mut acc, part| {
                for (total, count) in acc.iter_mut().zip(part.iter()) {
                    *total += count;
                }
                acc
            },
        )
}

/// Beautiful-number count aggregated from the enumerated histogram
pub fn count_by_enumeration() -> i64 {
    half_sum_histogram()
        .iter()
        .map(|&ways| BASE * ways * ways)
        .sum()
}

/// Every half-sum where the precomputed table differs from enumeration
pub fn table_mismatches() -> Vec<Mismatch> {
    let histogram = half_sum_histogram();

    WAYS.iter()
        .zip(histogram.iter())
        .enumerate()
        .filter(|(_, (formula, enumerated))| formula != enumerated)
        .map(|(sum, (&formula, &enumerated))| Mismatch {
            sum,
            formula,
            enumerated,
        })
        .collect()
}
