use crate::utils::{binomial5, BINOM6};
use crate::{BASE, DIGITS, MAX_HALF_SUM};

/// Number of 6-digit base-13 sequences whose digits sum to `sum`.
///
/// Inclusion-exclusion over the digits forced to be >= 13:
/// N(S) = sum_k (-1)^k * C(6, k) * C(S - 13k + 5, 5) for k = 0..=6.
/// Returns 0 for sums outside [0, 72].
pub const fn ways_for_sum(sum: i64) -> i64 {
    let mut result = 0;
    let mut sign = 1;
    let mut k = 0;

    while k <= DIGITS {
        let arg = sum - BASE * k as i64 + 5;

        // arg only decreases with k, so every remaining term is zero
        if arg < 5 {
            break;
        }

        result += sign * BINOM6[k] * binomial5(arg);
        sign = -sign;
        k += 1;
    }

    result
}

const fn build_ways_table() -> [i64; MAX_HALF_SUM + 1] {
    let mut table = [0; MAX_HALF_SUM + 1];
    let mut sum = 0;

    while sum <= MAX_HALF_SUM {
        table[sum] = ways_for_sum(sum as i64);
        sum += 1;
    }

    table
}

/// N(S) for every half-sum S in [0, 72], computed at compile time
pub static WAYS: [i64; MAX_HALF_SUM + 1] = build_ways_table();

/// Count 13-digit base-13 numerals whose first six digits sum to the same
/// value as their last six digits.
///
/// Each half-sum S contributes N(S) left halves, 13 middle digits and N(S)
/// right halves.
pub fn count_beautiful_numbers() -> i64 {
    WAYS.iter().map(|&ways| BASE * ways * ways).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ways_non_negative() {
        for sum in 0..=MAX_HALF_SUM as i64 {
            assert!(ways_for_sum(sum) >= 0, "N({}) is negative", sum);
        }
    }

    #[test]
    fn test_ways_symmetry() {
        for sum in 0..=MAX_HALF_SUM as i64 {
            assert_eq!(ways_for_sum(sum), ways_for_sum(MAX_HALF_SUM as i64 - sum));
        }
    }

    #[test]
    fn test_ways_boundaries() {
        assert_eq!(ways_for_sum(0), 1);
        assert_eq!(ways_for_sum(1), 6);
        assert_eq!(ways_for_sum(2), 21);
        assert_eq!(ways_for_sum(72), 1);
        assert_eq!(ways_for_sum(36), 204_763);
    }

    #[test]
    fn test_ways_outside_range() {
        assert_eq!(ways_for_sum(-1), 0);
        assert_eq!(ways_for_sum(-40), 0);
        assert_eq!(ways_for_sum(73), 0);
        assert_eq!(ways_for_sum(77), 0);
    }

    #[test]
    fn test_ways_total_is_all_halves() {
        let total: i64 = (0..=MAX_HALF_SUM as i64).map(ways_for_sum).sum();
        assert_eq!(total, BASE.pow(DIGITS as u32));
        assert_eq!(total, 4_826_809);
    }

    #[test]
    fn test_table_matches_function() {
        for (sum, &ways) in WAYS.iter().enumerate() {
            assert_eq!(ways, ways_for_sum(sum as i64));
        }
    }

    #[test]
    fn test_early_exit_matches_all_terms() {
        for sum in 0..=MAX_HALF_SUM as i64 {
            let full: i64 = (0..=DIGITS)
                .map(|k| {
                    let sign = if k % 2 == 0 { 1 } else { -1 };
                    sign * BINOM6[k] * binomial5(sum - BASE * k as i64 + 5)
                })
                .sum();
            assert_eq!(ways_for_sum(sum), full);
        }
    }

    #[test]
    fn test_count_beautiful_numbers() {
        assert_eq!(count_beautiful_numbers(), 9_203_637_295_151);
    }

    #[test]
    fn test_count_is_idempotent() {
        assert_eq!(count_beautiful_numbers(), count_beautiful_numbers());
    }
}
