//! Runtime configuration for the key-script runner

use serde::{Deserialize, Serialize};

pub use crate::core::GlyphStyle;

/// Logging verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational events
    Verbose,
    /// Every engine event
    Debug,
}

impl Verbosity {
    /// Builds a level from `-q` and the count of `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indicator line (if any) followed by the display
    #[default]
    Text,
    /// JSON snapshot
    Json,
}

/// Runner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Logging verbosity
    pub verbosity: Verbosity,
    /// Operator glyphs in the pending indicator
    pub glyphs: GlyphStyle,
    /// Output format
    pub output: OutputFormat,
    /// Print the state after every key instead of only the final one
    pub show_steps: bool,
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set glyph style
    #[must_use]
    pub const fn with_glyphs(mut self, glyphs: GlyphStyle) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set step-by-step output
    #[must_use]
    pub const fn with_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }
}
