//! Keypad model for the calculator
//!
//! Presentation-neutral description of the 4×5 button grid: which button
//! sits where, which variant it is styled as, and which engine action it
//! triggers. Renderers (terminal, DOM, native) read this; nothing in here
//! draws anything.
//!
//! ```text
//! [ AC ] [+/-] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use crate::core::{CalcError, CalcResult, Digit, Engine, GlyphStyle, Operator};

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// All-clear (AC)
    Clear,
    /// Negate the display (+/-)
    ToggleSign,
    /// Divide the display by 100 (%)
    Percent,
    /// Binary operator
    Operator(Operator),
    /// Digit 0-9
    Digit(Digit),
    /// Decimal point
    Decimal,
    /// Evaluate (=)
    Equals,
}

/// Visual variant of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Digits and the decimal point
    Default,
    /// Operators and equals
    Operator,
    /// AC, +/- and %
    Function,
}

impl KeypadAction {
    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.glyph(GlyphStyle::Unicode).to_string(),
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// Returns the styling variant
    #[must_use]
    pub const fn variant(&self) -> ButtonVariant {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonVariant::Default,
            Self::Operator(_) | Self::Equals => ButtonVariant::Operator,
            Self::Clear | Self::ToggleSign | Self::Percent => ButtonVariant::Function,
        }
    }

    /// Returns the element ID used for the button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Clear => "btn-clear".to_string(),
            Self::ToggleSign => "btn-sign".to_string(),
            Self::Percent => "btn-percent".to_string(),
            Self::Operator(op) => format!("btn-{}", op_name(*op)),
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Equals => "btn-equals".to_string(),
        }
    }

    /// Parses a key label, accepting ASCII aliases (`*`, `/`, `C`)
    pub fn from_label(label: &str) -> CalcResult<Self> {
        match label {
            "AC" | "C" => return Ok(Self::Clear),
            "+/-" => return Ok(Self::ToggleSign),
            "%" => return Ok(Self::Percent),
            "." => return Ok(Self::Decimal),
            "=" => return Ok(Self::Equals),
            _ => {}
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_digit() => Digit::try_from(ch).map(Self::Digit),
            (Some(ch), None) => Operator::try_from(ch)
                .map(Self::Operator)
                .map_err(|_| CalcError::UnknownKey(label.to_string())),
            _ => Err(CalcError::UnknownKey(label.to_string())),
        }
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// A single keypad button placed on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Action triggered by the button
    pub action: KeypadAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the left edge (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub col_span: usize,
}

impl KeypadButton {
    /// Creates a single-cell button
    #[must_use]
    pub const fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            action,
            row,
            col,
            col_span: 1,
        }
    }

    /// Creates a button spanning several columns
    #[must_use]
    pub const fn wide(action: KeypadAction, row: usize, col: usize, col_span: usize) -> Self {
        Self {
            action,
            row,
            col,
            col_span,
        }
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.col_span
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Returns the element ID
    #[must_use]
    pub fn id(&self) -> String {
        self.action.element_id()
    }

    /// Returns the styling variant
    #[must_use]
    pub const fn variant(&self) -> ButtonVariant {
        self.action.variant()
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Header text shown above the display
    pub const TITLE: &'static str = "Precision / Calc";

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Clear, Decimal, Equals, Percent, ToggleSign};
        let digit = |d: usize| KeypadAction::Digit(Digit::ALL[d]);
        let op = KeypadAction::Operator;

        let buttons = vec![
            // Row 0: AC +/- % ÷
            KeypadButton::new(Clear, 0, 0),
            KeypadButton::new(ToggleSign, 0, 1),
            KeypadButton::new(Percent, 0, 2),
            KeypadButton::new(op(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::new(digit(7), 1, 0),
            KeypadButton::new(digit(8), 1, 1),
            KeypadButton::new(digit(9), 1, 2),
            KeypadButton::new(op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new(digit(4), 2, 0),
            KeypadButton::new(digit(5), 2, 1),
            KeypadButton::new(digit(6), 2, 2),
            KeypadButton::new(op(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(digit(1), 3, 0),
            KeypadButton::new(digit(2), 3, 1),
            KeypadButton::new(digit(3), 3, 2),
            KeypadButton::new(op(Operator::Add), 3, 3),
            // Row 4: 0 (two columns) . =
            KeypadButton::wide(digit(0), 4, 0, 2),
            KeypadButton::new(Decimal, 4, 2),
            KeypadButton::new(Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label() == label)
    }

    /// Finds the button that triggers an action
    #[must_use]
    pub fn find_by_action(&self, action: KeypadAction) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Buttons of one variant, in grid order
    pub fn buttons_of(&self, variant: ButtonVariant) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.variant() == variant)
    }

    /// Processes a click on a button element and returns its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_by_id(element_id).map(|btn| btn.action)
    }
}

impl Engine {
    /// Dispatches one keypad action to the matching input handler
    pub fn press(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Clear => self.reset(),
            KeypadAction::ToggleSign => self.toggle_sign(),
            KeypadAction::Percent => self.input_percent(),
            KeypadAction::Operator(op) => self.input_operator(op),
            KeypadAction::Digit(d) => self.input_digit(d),
            KeypadAction::Decimal => self.input_decimal_point(),
            KeypadAction::Equals => self.input_equals(),
        }
    }
}
