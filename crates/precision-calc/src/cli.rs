//! Command-line front end: replay a key script and print the result
//!
//! ```bash
//! precision-calc 2 + 3 × 4 =            # 20
//! precision-calc "6/3="                  # 2
//! precision-calc --format json 9 ÷       # {"display":"9","indicator":"9 ÷",...}
//! precision-calc --steps 1 . 5 +/-       # state after every key
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::{CalcConfig, GlyphStyle, OutputFormat, Verbosity};
use crate::core::{CalcError, Engine};
use crate::driver::KeySequence;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Key script could not be parsed
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Replay a calculator key script
#[derive(Parser, Debug)]
#[command(name = "precision-calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keys to press, e.g. `2 + 3 × 4 =` or a single quoted script `"12.5*4="`
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Use `*` and `/` instead of `×` and `÷` in the pending indicator
    #[arg(long)]
    pub ascii: bool,

    /// Print the state after every key
    #[arg(long)]
    pub steps: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Observable engine state after a key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Key that produced this state (step output only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Display text
    pub display: String,
    /// Pending-operation hint
    pub indicator: Option<String>,
    /// Whether the next digit starts a new number
    pub awaiting_new_operand: bool,
}

impl Snapshot {
    /// Captures the observable state of an engine
    #[must_use]
    pub fn capture(engine: &Engine, glyphs: GlyphStyle) -> Self {
        Self {
            key: None,
            display: engine.display().to_string(),
            indicator: engine.pending_indicator().map(|p| p.render(glyphs)),
            awaiting_new_operand: engine.is_awaiting_new_operand(),
        }
    }

    /// Attaches the key label
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Text rendering: indicator line (if any), then the display
    #[must_use]
    pub fn to_text(&self) -> String {
        match &self.indicator {
            Some(hint) => format!("{hint}\n{}", self.display),
            None => self.display.clone(),
        }
    }

    /// One-line rendering used for step output
    #[must_use]
    pub fn to_step_line(&self) -> String {
        format!(
            "{:<4} {:<12} {}",
            self.key.as_deref().unwrap_or(""),
            self.indicator.as_deref().unwrap_or(""),
            self.display
        )
    }
}

/// Builds the runner configuration from CLI flags
#[must_use]
pub fn build_config(cli: &Cli) -> CalcConfig {
    let glyphs = if cli.ascii {
        GlyphStyle::Ascii
    } else {
        GlyphStyle::Unicode
    };

    CalcConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_glyphs(glyphs)
        .with_output(cli.format.into())
        .with_steps(cli.steps)
}

/// Replays `script` on a fresh engine and renders the output
pub fn run_script(script: &str, config: &CalcConfig) -> CliResult<String> {
    let sequence = KeySequence::parse(script)?;
    info!(keys = sequence.len(), script = %sequence, "replaying key script");

    let mut engine = Engine::new();
    let mut steps = Vec::with_capacity(sequence.len());
    for action in sequence.iter() {
        engine.press(*action);
        if config.show_steps {
            steps.push(Snapshot::capture(&engine, config.glyphs).with_key(action.label()));
        }
    }
    let last = Snapshot::capture(&engine, config.glyphs);

    let rendered = match (config.output, config.show_steps) {
        (OutputFormat::Text, false) => last.to_text(),
        (OutputFormat::Text, true) => steps
            .iter()
            .map(Snapshot::to_step_line)
            .collect::<Vec<_>>()
            .join("\n"),
        (OutputFormat::Json, false) => serde_json::to_string(&last)?,
        (OutputFormat::Json, true) => serde_json::to_string(&steps)?,
    };
    Ok(rendered)
}

/// Runs the parsed command line with a configuration built by [`build_config`]
pub fn run(cli: &Cli, config: &CalcConfig) -> CliResult<String> {
    run_script(&cli.keys.join(" "), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_config() -> CalcConfig {
        CalcConfig::new()
    }

    // ===== Argument parsing =====

    #[test]
    fn test_cli_parses_keys() {
        let cli = Cli::parse_from(["precision-calc", "2", "+", "3", "="]);
        assert_eq!(cli.keys, ["2", "+", "3", "="]);
        assert_eq!(cli.format, FormatArg::Text);
        assert!(!cli.ascii);
    }

    #[test]
    fn test_cli_accepts_minus_and_toggle_keys() {
        let cli = Cli::parse_from(["precision-calc", "9", "-", "4", "+/-", "="]);
        assert_eq!(cli.keys.len(), 5);
        assert_eq!(run(&cli, &build_config(&cli)).unwrap(), "13");
    }

    #[test]
    fn test_cli_flags_after_keys() {
        let cli =
            Cli::try_parse_from(["precision-calc", "1", "+", "1", "=", "-v", "--ascii"]).unwrap();
        assert_eq!(cli.keys, ["1", "+", "1", "="]);
        assert_eq!(cli.verbose, 1);
        assert!(cli.ascii);
        assert_eq!(run(&cli, &build_config(&cli)).unwrap(), "2");
    }

    #[test]
    fn test_cli_flags_map_to_config() {
        let cli = Cli::parse_from([
            "precision-calc",
            "--format",
            "json",
            "--ascii",
            "--steps",
            "-vv",
            "1",
        ]);
        let config = build_config(&cli);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.glyphs, GlyphStyle::Ascii);
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert!(config.show_steps);
    }

    #[test]
    fn test_cli_quiet_wins() {
        let cli = Cli::parse_from(["precision-calc", "-q", "-v"]);
        assert_eq!(build_config(&cli).verbosity, Verbosity::Quiet);
    }

    // ===== run_script =====

    #[test]
    fn test_run_script_text_result() {
        assert_eq!(run_script("2 + 3 × 4 =", &text_config()).unwrap(), "20");
    }

    #[test]
    fn test_run_script_text_with_indicator() {
        assert_eq!(run_script("6 ÷", &text_config()).unwrap(), "6 ÷\n6");
    }

    #[test]
    fn test_run_script_ascii_indicator() {
        let config = text_config().with_glyphs(GlyphStyle::Ascii);
        assert_eq!(run_script("6 ÷", &config).unwrap(), "6 /\n6");
    }

    #[test]
    fn test_run_script_empty_shows_zero() {
        assert_eq!(run_script("", &text_config()).unwrap(), "0");
    }

    #[test]
    fn test_run_script_json() {
        let config = text_config().with_output(OutputFormat::Json);
        let out = run_script("5 ÷ 0 =", &config).unwrap();
        let snapshot: Snapshot = serde_json::from_str(&out).unwrap();
        assert_eq!(snapshot.display, "Infinity");
        assert_eq!(snapshot.indicator, None);
        assert!(snapshot.awaiting_new_operand);
        assert!(snapshot.key.is_none());
        assert!(!out.contains("\"key\""));
    }

    #[test]
    fn test_run_script_json_steps() {
        let config = text_config()
            .with_output(OutputFormat::Json)
            .with_steps(true);
        let out = run_script("2 + 3 =", &config).unwrap();
        let steps: Vec<Snapshot> = serde_json::from_str(&out).unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1].key.as_deref(), Some("+"));
        assert_eq!(steps[1].indicator.as_deref(), Some("2 +"));
        assert_eq!(steps[3].display, "5");
    }

    #[test]
    fn test_run_script_text_steps() {
        let config = text_config().with_steps(true);
        let out = run_script("7 +/-", &config).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('7'));
        assert!(lines[1].starts_with("+/-"));
        assert!(lines[1].ends_with("-7"));
    }

    #[test]
    fn test_run_script_unknown_key() {
        let err = run_script("2 ^ 2", &text_config()).unwrap_err();
        assert!(matches!(err, CliError::Calc(CalcError::UnknownKey(_))));
        assert_eq!(err.to_string(), "unknown key: \"^\"");
    }

    // ===== Snapshot =====

    #[test]
    fn test_snapshot_capture_initial() {
        let snapshot = Snapshot::capture(&Engine::new(), GlyphStyle::Unicode);
        assert_eq!(snapshot.display, "0");
        assert!(snapshot.indicator.is_none());
        assert!(!snapshot.awaiting_new_operand);
        assert_eq!(snapshot.to_text(), "0");
    }
}
