//! Unified calculator drivers
//!
//! **Write the verification once, run it through every front end.**
//!
//! [`CalculatorDriver`] is the surface a presentation layer offers: press a
//! key, read the display and the pending hint. [`EngineDriver`] talks to the
//! engine directly; [`KeypadDriver`] goes through the keypad model the way a
//! rendered keypad would, clicking buttons by element ID. The `verify_*`
//! functions below run against either.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::core::{CalcError, CalcResult, Engine, GlyphStyle};
use crate::keypad::{Keypad, KeypadAction};

/// Multi-character key labels, matched before single characters
const MULTI_CHAR_KEYS: [&str; 2] = ["AC", "+/-"];

/// A parsed key script such as `"2 + 3 × 4 ="` or `"AC 5 +/- %"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySequence {
    actions: Vec<KeypadAction>,
}

impl KeySequence {
    /// Parses a key script. Whitespace between keys is optional.
    pub fn parse(script: &str) -> CalcResult<Self> {
        let mut actions = Vec::new();
        let mut rest = script.trim_start();

        while !rest.is_empty() {
            let token = MULTI_CHAR_KEYS
                .iter()
                .copied()
                .find(|key| rest.starts_with(key))
                .unwrap_or_else(|| {
                    let width = rest.chars().next().map_or(0, char::len_utf8);
                    &rest[..width]
                });
            actions.push(KeypadAction::from_label(token)?);
            rest = rest[token.len()..].trim_start();
        }

        Ok(Self { actions })
    }

    /// Returns the parsed actions
    #[must_use]
    pub fn actions(&self) -> &[KeypadAction] {
        &self.actions
    }

    /// Returns the number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if the script held no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates over the actions in order
    pub fn iter(&self) -> impl Iterator<Item = &KeypadAction> {
        self.actions.iter()
    }
}

impl FromStr for KeySequence {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.actions.iter().map(KeypadAction::label).collect();
        f.write_str(&labels.join(" "))
    }
}

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, action: KeypadAction);

    /// Current display text
    fn display(&self) -> String;

    /// Current pending-operation hint, if any
    fn indicator(&self) -> Option<String>;

    /// Presses AC
    fn clear(&mut self) {
        self.press(KeypadAction::Clear);
    }

    /// Presses every key of a script in order
    fn enter_keys(&mut self, script: &str) -> CalcResult<()> {
        let sequence = KeySequence::parse(script)?;
        for action in sequence.iter() {
            self.press(*action);
        }
        Ok(())
    }
}

/// Driver that presses actions straight into an [`Engine`]
#[derive(Debug, Clone, Default)]
pub struct EngineDriver {
    engine: Engine,
    glyphs: GlyphStyle,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyph style used for the indicator
    #[must_use]
    pub const fn with_glyphs(mut self, glyphs: GlyphStyle) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the underlying engine mutably
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, action: KeypadAction) {
        self.engine.press(action);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn indicator(&self) -> Option<String> {
        self.engine
            .pending_indicator()
            .map(|p| p.render(self.glyphs))
    }
}

/// Driver that routes every key through the keypad model by element ID
#[derive(Debug, Clone, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    engine: Engine,
    clicks: Vec<String>,
}

impl KeypadDriver {
    /// Creates a driver around the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Element IDs clicked since the last AC, starting with that AC
    #[must_use]
    pub fn clicks(&self) -> &[String] {
        &self.clicks
    }

    /// Clicks a button by element ID; returns false if no such button exists
    pub fn click(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(action) => {
                if action == KeypadAction::Clear {
                    self.clicks.clear();
                }
                self.clicks.push(element_id.to_string());
                self.engine.press(action);
                true
            }
            None => {
                warn!(element_id, "click on unknown element");
                false
            }
        }
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, action: KeypadAction) {
        let Some(id) = self.keypad.find_by_action(action).map(|b| b.id()) else {
            warn!(?action, "no keypad button for action");
            return;
        };
        self.click(&id);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn indicator(&self) -> Option<String> {
        self.engine
            .pending_indicator()
            .map(|p| p.render(GlyphStyle::Unicode))
    }
}

// ===== Unified Verification =====
// These run against ANY CalculatorDriver implementation

/// Verifies digit entry and the decimal-point guard
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.enter_keys("0 0")?;
    assert_eq!(driver.display(), "0");
    driver.enter_keys("1 2 3")?;
    assert_eq!(driver.display(), "123");
    driver.enter_keys(". . 4")?;
    assert_eq!(driver.display(), "123.4");
    driver.clear();
    Ok(())
}

/// Verifies left-to-right evaluation without precedence
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.enter_keys("2 + 3 ×")?;
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.indicator().as_deref(), Some("5 ×"));
    driver.enter_keys("4 =")?;
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.indicator(), None);

    driver.clear();
    driver.enter_keys("6 ÷ 3 =")?;
    assert_eq!(driver.display(), "2");
    driver.clear();
    Ok(())
}

/// Verifies sign toggle and percent
pub fn verify_unary_functions<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.enter_keys("5 0 %")?;
    assert_eq!(driver.display(), "0.5");
    driver.enter_keys("+/-")?;
    assert_eq!(driver.display(), "-0.5");
    driver.enter_keys("+/-")?;
    assert_eq!(driver.display(), "0.5");
    driver.clear();
    Ok(())
}

/// Verifies that division by zero shows IEEE-754 values instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.enter_keys("5 ÷ 0 =")?;
    assert_eq!(driver.display(), "Infinity");
    driver.clear();
    driver.enter_keys("0 ÷ 0 =")?;
    assert_eq!(driver.display(), "NaN");
    driver.clear();
    Ok(())
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_chained_evaluation(driver)?;
    verify_unary_functions(driver)?;
    verify_division_by_zero(driver)?;
    Ok(())
}
