//! Tracing subscriber setup
//!
//! Logs go to stderr. `RUST_LOG` always wins; otherwise the filter follows the
//! verbosity flags, except that full-screen commands default to `off` while
//! stderr is a terminal so log lines cannot tear the UI.

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Filter directive used when `RUST_LOG` is unset
#[must_use]
pub const fn default_filter(
    verbosity: Verbosity,
    interactive: bool,
    stderr_is_terminal: bool,
) -> &'static str {
    if interactive && stderr_is_terminal {
        "off"
    } else {
        verbosity.filter()
    }
}

/// Installs the global subscriber. Fails if called twice.
pub fn init_logging(verbosity: Verbosity, interactive: bool, color: bool) -> CliResult<()> {
    INITIALISED
        .set(())
        .map_err(|()| CliError::logging("tracing has already been initialised"))?;

    let stderr_is_terminal = std::io::stderr().is_terminal();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_filter(verbosity, interactive, stderr_is_terminal))
    });
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(color && stderr_is_terminal);

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| CliError::logging(err.to_string()))
}
