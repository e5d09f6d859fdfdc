//! Error types for numeral construction and parsing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumeralError {
    #[error("expected {expected} base-13 digits, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("invalid base-13 digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },

    #[error("digit value {digit} at position {position} is not below 13")]
    DigitOutOfRange { digit: u8, position: usize },

    #[error("value {0} does not fit in 13 base-13 digits")]
    ValueOutOfRange(u64),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<NumeralError>,
    },

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, NumeralError>;
