//! Binary operators and the evaluator behind them
//!
//! Division by zero is left to IEEE-754: the result is a signed infinity or
//! NaN, and the display shows whatever `format_number` makes of it.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// How operator symbols are drawn in the pending-operation hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Keypad glyphs: `÷` and `×`
    #[default]
    Unicode,
    /// Plain `/` and `*`
    Ascii,
}

/// The four operators of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the ASCII operator symbol
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the symbol to render for the given glyph style
    #[must_use]
    pub const fn glyph(&self, style: GlyphStyle) -> char {
        match (self, style) {
            (Self::Multiply, GlyphStyle::Unicode) => '×',
            (Self::Divide, GlyphStyle::Unicode) => '÷',
            _ => self.symbol(),
        }
    }

    /// Evaluates `a <op> b`
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(ch: char) -> CalcResult<Self> {
        match ch {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }
}
