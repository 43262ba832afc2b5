//! Precision Calc - immediate-execution calculator engine
//!
//! The engine behind a four-function keypad calculator. Keystrokes go in,
//! a display string and an optional "2 +" style hint come out. Operators
//! apply strictly left to right as they are pressed; there is no precedence
//! and no expression parser.
//!
//! # Example
//!
//! ```rust
//! use precision_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for key in KeySequence::parse("2 + 3 × 4").unwrap().iter() {
//!     engine.press(*key);
//! }
//! assert_eq!(engine.pending_indicator().unwrap().to_string(), "5 ×");
//!
//! engine.input_equals();
//! assert_eq!(engine.display(), "20");
//!
//! // Division by zero is not an error
//! let mut driver = EngineDriver::new();
//! driver.enter_keys("5 ÷ 0 =").unwrap();
//! assert_eq!(driver.display(), "Infinity");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod logging;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, OutputFormat, Verbosity};
    pub use crate::core::{
        format_number, parse_number, CalcError, CalcResult, Digit, Engine, EngineState,
        GlyphStyle, Operator, Pending, PendingIndicator,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver, KeySequence, KeypadDriver};
    pub use crate::keypad::{ButtonVariant, Keypad, KeypadAction, KeypadButton};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        engine.input_digit(Digit::new(4).unwrap());
        engine.input_operator(Operator::Multiply);
        engine.input_digit(Digit::new(2).unwrap());
        engine.input_equals();
        assert_eq!(engine.display(), "8");
    }

    #[test]
    fn test_immediate_execution_vs_precedence() {
        // 2 + 3 * 4 with precedence would be 14
        let mut driver = EngineDriver::new();
        driver.enter_keys("2 + 3 * 4 =").unwrap();
        assert_eq!(driver.display(), "20");
    }

    #[test]
    fn test_keypad_and_engine_share_actions() {
        let keypad = Keypad::new();
        let mut engine = Engine::new();
        for id in ["btn-5", "btn-0", "btn-percent"] {
            engine.press(keypad.handle_click(id).unwrap());
        }
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn test_number_helpers_exported() {
        assert_eq!(format_number(parse_number("12.").unwrap()), "12");
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Engine>();
    }
}
