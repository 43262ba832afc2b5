//! precision-calc: replay a calculator key script
//!
//! ## Usage
//!
//! ```bash
//! precision-calc 2 + 3 × 4 =           # 20
//! precision-calc --format json 9 ÷     # JSON snapshot
//! precision-calc --steps "1.5*4="      # state after every key
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use precision_calc::cli::{self, Cli, CliResult};
use precision_calc::logging::init_tracing;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let args = Cli::parse();
    let config = cli::build_config(&args);
    init_tracing(config.verbosity);

    let output = cli::run(&args, &config)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
