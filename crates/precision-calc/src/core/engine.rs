//! Immediate-execution input engine
//!
//! Each binary operator is evaluated as soon as the next operator or `=`
//! arrives, strictly left to right: `2 + 3 × 4 =` shows `20`, not `14`.
//!
//! The whole machine is four pieces of state: the display text, the pending
//! operand and operator (stored together, so one is never present without
//! the other), and whether the next digit starts a fresh number.

use std::fmt;

use tracing::{debug, error, trace};

use crate::core::number::{format_number, parse_number};
use crate::core::{Digit, GlyphStyle, Operator};

/// Display text of a freshly reset engine
const INITIAL_DISPLAY: &str = "0";

/// Left-hand operand and the operator waiting for its right-hand side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    /// Value captured when the operator was pressed
    pub operand: f64,
    /// Operator awaiting a right-hand operand
    pub operator: Operator,
}

/// Complete engine state
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    display: String,
    pending: Option<Pending>,
    awaiting_new_operand: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            awaiting_new_operand: false,
        }
    }
}

impl EngineState {
    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending operand and operator, if an operation is in flight
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Left-hand operand of the pending operation
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operator of the pending operation
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the next digit replaces the display
    #[must_use]
    pub fn awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }
}

/// Display-only projection of the pending operation (the "2 +" hint line)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingIndicator {
    /// Left-hand operand
    pub operand: f64,
    /// Pending operator
    pub operator: Operator,
}

impl PendingIndicator {
    /// Renders the hint line with the given operator glyphs
    #[must_use]
    pub fn render(&self, style: GlyphStyle) -> String {
        format!(
            "{} {}",
            format_number(self.operand),
            self.operator.glyph(style)
        )
    }
}

impl fmt::Display for PendingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(GlyphStyle::Unicode))
    }
}

impl From<Pending> for PendingIndicator {
    fn from(pending: Pending) -> Self {
        Self {
            operand: pending.operand,
            operator: pending.operator,
        }
    }
}

/// The calculator engine
///
/// Every event handler is total: it always succeeds and leaves the state
/// well-formed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    state: EngineState,
}

impl Engine {
    /// Creates an engine showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Returns the pending-operation hint, present iff an operator is pending
    #[must_use]
    pub fn pending_indicator(&self) -> Option<PendingIndicator> {
        self.state.pending.map(PendingIndicator::from)
    }

    /// Whether the next digit starts a fresh number
    #[must_use]
    pub fn is_awaiting_new_operand(&self) -> bool {
        self.state.awaiting_new_operand
    }

    /// All-clear: back to the initial state
    pub fn reset(&mut self) {
        self.state = EngineState::default();
        debug!("reset");
    }

    /// Enters one digit
    pub fn input_digit(&mut self, digit: Digit) {
        let state = &mut self.state;
        if state.awaiting_new_operand {
            state.display = digit.to_string();
            state.awaiting_new_operand = false;
        } else if state.display == INITIAL_DISPLAY {
            state.display = digit.to_string();
        } else {
            state.display.push(digit.as_char());
        }
        debug!(%digit, display = %state.display, "digit");
    }

    /// Enters the decimal point; a second one in the same number is ignored
    pub fn input_decimal_point(&mut self) {
        let state = &mut self.state;
        if state.awaiting_new_operand {
            state.display = "0.".to_string();
            state.awaiting_new_operand = false;
        } else if !state.display.contains('.') {
            state.display.push('.');
        }
        debug!(display = %state.display, "decimal point");
    }

    /// Presses a binary operator, evaluating any operation already pending
    pub fn input_operator(&mut self, operator: Operator) {
        let value = self.display_value();
        let operand = match self.state.pending {
            None => value,
            Some(pending) => {
                let result = pending.operator.apply(pending.operand, value);
                trace!(lhs = pending.operand, rhs = value, op = %pending.operator.symbol(), result, "chained");
                self.state.display = format_number(result);
                result
            }
        };
        self.state.pending = Some(Pending { operand, operator });
        self.state.awaiting_new_operand = true;
        debug!(op = %operator.symbol(), operand, display = %self.state.display, "operator");
    }

    /// Presses `=`; does nothing when no operator is pending
    pub fn input_equals(&mut self) {
        let Some(pending) = self.state.pending else {
            debug!("equals with nothing pending");
            return;
        };
        let value = self.display_value();
        let result = pending.operator.apply(pending.operand, value);
        trace!(lhs = pending.operand, rhs = value, op = %pending.operator.symbol(), result, "equals");
        self.state.display = format_number(result);
        self.state.pending = None;
        self.state.awaiting_new_operand = true;
        debug!(display = %self.state.display, "equals");
    }

    /// Negates the displayed value
    pub fn toggle_sign(&mut self) {
        self.state.display = format_number(-self.display_value());
        debug!(display = %self.state.display, "toggle sign");
    }

    /// Divides the displayed value by 100
    pub fn input_percent(&mut self) {
        self.state.display = format_number(self.display_value() / 100.0);
        debug!(display = %self.state.display, "percent");
    }

    /// Numeric value of the display. The display is only ever written by
    /// this engine, so a parse failure is a defect and stops the line.
    fn display_value(&self) -> f64 {
        match parse_number(&self.state.display) {
            Ok(value) => value,
            Err(err) => {
                error!(%err, "display invariant violated");
                panic!("calculator engine defect: {err}");
            }
        }
    }
}
