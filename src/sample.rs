use crate::{count_beautiful_numbers, Numeral, BASE, DIGITS, MAX_HALF_SUM, NUMERAL_LEN, WAYS};
use rand::Rng;

/// Uniformly random digit in [0, 12]
fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..BASE as u8)
}

fn random_half<R: Rng + ?Sized>(rng: &mut R) -> [u8; DIGITS] {
    let mut half = [0; DIGITS];
    for digit in half.iter_mut() {
        *digit = random_digit(rng);
    }
    half
}

/// Uniformly random half whose digits sum to `sum`, by rejection
fn random_half_with_sum<R: Rng + ?Sized>(rng: &mut R, sum: usize) -> [u8; DIGITS] {
    loop {
        let half = random_half(rng);
        if half.iter().map(|&d| d as usize).sum::<usize>() == sum {
            return half;
        }
    }
}

/// Pick a half-sum S with probability 13 * N(S)^2 / total
fn random_half_sum<R: Rng + ?Sized>(rng: &mut R) -> usize {
    let mut pick = rng.gen_range(0..count_beautiful_numbers());

    for (sum, &ways) in WAYS.iter().enumerate() {
        let weight = BASE * ways * ways;
        if pick < weight {
            return sum;
        }
        pick -= weight;
    }

    MAX_HALF_SUM
}

/// Uniformly random numeral over all 13^13 values
pub fn random_numeral<R: Rng + ?Sized>(rng: &mut R) -> Numeral {
    let mut digits = [0; NUMERAL_LEN];
    for digit in digits.iter_mut() {
        *digit = random_digit(rng);
    }
    Numeral { digits }
}

/// Uniformly random beautiful numeral.
///
/// Weighting the half-sum by the number of beautiful numerals it owns, then
/// drawing both halves uniformly among those with that sum, gives every
/// beautiful numeral the same probability. The rejection step needs about
/// 13^13 / total (~33) attempts per half on average.
pub fn random_beautiful_numeral<R: Rng + ?Sized>(rng: &mut R) -> Numeral {
    let sum = random_half_sum(rng);
    let left = random_half_with_sum(rng, sum);
    let middle = random_digit(rng);
    let right = random_half_with_sum(rng, sum);

    let mut digits = [0; NUMERAL_LEN];
    digits[..DIGITS].copy_from_slice(&left);
    digits[DIGITS] = middle;
    digits[DIGITS + 1..].copy_from_slice(&right);
    Numeral { digits }
}

/// Exact share of beautiful numerals among all 13-digit numerals
pub fn beautiful_fraction() -> f64 {
    count_beautiful_numbers() as f64 / (BASE as f64).powi(NUMERAL_LEN as i32)
}

/// Monte Carlo estimate of the beautiful share from `trials` uniform draws
pub fn estimate_beautiful_fraction<R: Rng + ?Sized>(rng: &mut R, trials: usize) -> f64 {
    if trials == 0 {
        return 0.0;
    }

    let hits = (0..trials)
        .filter(|_| random_numeral(rng).is_beautiful())
        .count();
    hits as f64 / trials as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_numeral_digits_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let n = random_numeral(&mut rng);
            assert!(n.digits().iter().all(|&d| d < 13));
        }
    }

    #[test]
    fn test_random_beautiful_numeral_is_beautiful() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let n = random_beautiful_numeral(&mut rng);
            assert!(n.is_beautiful(), "{} is not beautiful", n);
        }
    }

    #[test]
    fn test_half_sum_weights_favor_middle() {
        let mut rng = StdRng::seed_from_u64(3);
        let sums: Vec<usize> = (0..2000).map(|_| random_half_sum(&mut rng)).collect();
        assert!(sums.iter().all(|&s| s <= MAX_HALF_SUM));

        // Over 99.8% of the weight lies within 36 +- 20
        let central = sums.iter().filter(|&&s| (16..=56).contains(&s)).count();
        assert!(central > 1950, "central = {}", central);
    }

    #[test]
    fn test_beautiful_fraction() {
        let fraction = beautiful_fraction();
        assert!((fraction - 0.030_387_566).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_near_exact() {
        let mut rng = StdRng::seed_from_u64(2024);
        let estimate = estimate_beautiful_fraction(&mut rng, 200_000);
        assert!((estimate - beautiful_fraction()).abs() < 0.003, "estimate = {}", estimate);
    }

    #[test]
    fn test_estimate_without_trials() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(estimate_beautiful_fraction(&mut rng, 0), 0.0);
    }
}
