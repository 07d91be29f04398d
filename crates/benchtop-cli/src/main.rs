//! Benchtop: keypad calculator and well plate manager
//!
//! ## Usage
//!
//! ```bash
//! benchtop calc                    # Interactive calculator
//! benchtop eval "42 * (3 + 7)"     # One-shot evaluation
//! benchtop keys 2 + 3 =            # Scripted keypad
//! benchtop plate --format 384      # Interactive plate manager
//! benchtop well H12                # Label to grid position
//! ```

use benchtop::{handlers, logging, Cli, CliResult};
use clap::Parser;
use std::process::ExitCode;

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
    let cli = Cli::parse();
    let config = cli.config();

    config.color.apply();
    logging::init_logging(
        config.verbosity,
        cli.command.is_interactive(),
        config.color.should_color(),
    )?;
    tracing::debug!(?config, "configuration resolved");

    handlers::execute(cli.command, &config)
}
