//! Calculator core: operators, number text rules and the input engine
//!
//! Everything in here is synchronous and allocation-light. The engine owns
//! its state exclusively; callers serialize events.

pub mod engine;
pub mod number;
mod operations;

pub use engine::{Engine, EngineState, Pending, PendingIndicator};
pub use number::{format_number, parse_number};
pub use operations::{GlyphStyle, Operator};

use std::fmt;
use thiserror::Error;

/// Result type for calculator boundary operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the edges of the calculator core.
///
/// Engine events never return these; they come from the constructors that
/// turn untyped input (chars, labels, display text) into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Display text has no numeric prefix at all
    #[error("malformed display value: {0:?}")]
    MalformedDisplay(String),
    /// Character is not one of `+ - * /` (or their glyphs)
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),
    /// Value outside `0..=9`
    #[error("invalid digit: {0}")]
    InvalidDigit(u32),
    /// Key label not present on the keypad
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
}

/// A single decimal digit, `0` through `9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(u32::from(value)))
        }
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(ch: char) -> CalcResult<Self> {
        match ch.to_digit(10) {
            Some(d) => Ok(Self(d as u8)),
            None => Err(CalcError::UnknownKey(ch.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
