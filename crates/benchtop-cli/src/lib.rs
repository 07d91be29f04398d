//! Benchtop CLI library
//!
//! Argument parsing, configuration, logging setup and the command handlers
//! behind the `benchtop` binary.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;
pub mod terminal;

pub use commands::{
    Cli, ColorArg, Commands, EvalArgs, GridArgs, KeysArgs, PlateArgs, WellArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{grid_table, Printer};
