use crate::DIGITS;

/// Binomial coefficients C(6, k) for k = 0..=6
pub const BINOM6: [i64; DIGITS + 1] = [1, 6, 15, 20, 15, 6, 1];

/// Calculate C(n, 5), which is zero for every n < 5 (negative n included)
pub const fn binomial5(n: i64) -> i64 {
    if n < 5 {
        return 0;
    }

    n * (n - 1) * (n - 2) * (n - 3) * (n - 4) / 120
}
