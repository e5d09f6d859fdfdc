use std::fmt;

/// Digits in each half of a numeral
pub const DIGITS: usize = 6;

/// Numeral base
pub const BASE: i64 = 13;

/// Largest digit sum of one half: 12 * 6
pub const MAX_HALF_SUM: usize = (BASE as usize - 1) * DIGITS;

/// Digits in a full numeral: two halves plus the middle digit
pub const NUMERAL_LEN: usize = 2 * DIGITS + 1;

/// A 13-digit base-13 numeral, most significant digit first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numeral {
    digits: [u8; NUMERAL_LEN],
}

impl Numeral {
    pub fn from_digits(digits: [u8; NUMERAL_LEN]) -> Result<Self> {
        if let Some(position) = digits.iter().position(|&d| i64::from(d) >= BASE) {
            return Err(NumeralError::DigitOutOfRange {
                digit: digits[position],
                position,
            });
        }
        Ok(Numeral { digits })
    }

    pub fn from_halves(left: [u8; DIGITS], middle: u8, right: [u8; DIGITS]) -> Result<Self> {
        let mut digits = [0; NUMERAL_LEN];
        digits[..DIGITS].copy_from_slice(&left);
        digits[DIGITS] = middle;
        digits[DIGITS + 1..].copy_from_slice(&right);
        Self::from_digits(digits)
    }

    /// Build the numeral for `value`, padding with leading zeros
    pub fn from_value(value: u64) -> Result<Self> {
        let base = BASE as u64;
        if value >= base.pow(NUMERAL_LEN as u32) {
            return Err(NumeralError::ValueOutOfRange(value));
        }

        let mut digits = [0; NUMERAL_LEN];
        let mut rest = value;
        for digit in digits.iter_mut().rev() {
            *digit = (rest % base) as u8;
            rest /= base;
        }
        Ok(Numeral { digits })
    }

    pub fn value(&self) -> u64 {
        self.digits
            .iter()
            .fold(0, |acc, &d| acc * BASE as u64 + u64::from(d))
    }

    pub fn digits(&self) -> &[u8; NUMERAL_LEN] {
        &self.digits
    }

    pub fn left_sum(&self) -> usize {
        self.digits[..DIGITS].iter().map(|&d| d as usize).sum()
    }

    pub fn middle(&self) -> u8 {
        self.digits[DIGITS]
    }

    pub fn right_sum(&self) -> usize {
        self.digits[DIGITS + 1..].iter().map(|&d| d as usize).sum()
    }

    pub fn is_beautiful(&self) -> bool {
        self.left_sum() == self.right_sum()
    }

    /// Replace every digit d with 12 - d
    pub fn complement(&self) -> Self {
        let mut digits = self.digits;
        for digit in digits.iter_mut() {
            *digit = (BASE as u8 - 1) - *digit;
        }
        Numeral { digits }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            let ch = char::from_digit(u32::from(d), BASE as u32).unwrap_or('?');
            write!(f, "{}", ch.to_ascii_uppercase())?;
        }
        Ok(())
    }
}

// Module declarations
pub mod enumerate;
pub mod error;
pub mod parser;
pub mod sample;
pub mod utils;
pub mod ways;

pub use error::{NumeralError, Result};
pub use ways::{count_beautiful_numbers, ways_for_sum, WAYS};
