use crate::{Numeral, NumeralError, Result, NUMERAL_LEN};
use nom::{
    character::complete::{anychar, space0},
    combinator::map_opt,
    multi::many1,
    sequence::preceded,
    IResult,
};
use std::path::Path;

/// Parse a single base-13 digit: 0-9, then A-C in either case
fn base13_digit(input: &str) -> IResult<&str, u8> {
    map_opt(anychar, |c: char| c.to_digit(13).map(|d| d as u8))(input)
}

/// Parse a run of base-13 digits, stopping at the first other character
fn digit_run(input: &str) -> IResult<&str, Vec<u8>> {
    preceded(space0, many1(base13_digit))(input)
}

/// Parse a 13-digit base-13 numeral, ignoring surrounding whitespace
pub fn parse_numeral(input: &str) -> Result<Numeral> {
    let trimmed = input.trim();

    let digits = match digit_run(trimmed) {
        Ok((rest, digits)) => {
            if let Some(ch) = rest.chars().next() {
                return Err(NumeralError::InvalidDigit {
                    ch,
                    position: digits.len(),
                });
            }
            digits
        }
        Err(_) => {
            return Err(match trimmed.chars().next() {
                Some(ch) => NumeralError::InvalidDigit { ch, position: 0 },
                None => NumeralError::WrongLength {
                    expected: NUMERAL_LEN,
                    found: 0,
                },
            });
        }
    };

    let digits: [u8; NUMERAL_LEN] =
        digits
            .try_into()
            .map_err(|digits: Vec<u8>| NumeralError::WrongLength {
                expected: NUMERAL_LEN,
                found: digits.len(),
            })?;

    Numeral::from_digits(digits)
}

/// Parse one numeral per line; blank lines and lines starting with '#' are skipped
pub fn parse_numeral_list(input: &str) -> Result<Vec<Numeral>> {
    let mut numerals = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let numeral = parse_numeral(line).map_err(|e| NumeralError::Line {
            line: idx + 1,
            source: Box::new(e),
        })?;
        numerals.push(numeral);
    }

    Ok(numerals)
}

/// Parse input file containing one numeral per line
pub fn parse_input_file(path: &Path) -> Result<Vec<Numeral>> {
    let content = std::fs::read_to_string(path).map_err(|source| NumeralError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_numeral_list(&content)
}
