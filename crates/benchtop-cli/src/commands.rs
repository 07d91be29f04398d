//! CLI command definitions using clap

use benchtop_plate::grid::PlateFormat;
use benchtop_plate::PlateError;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{CliConfig, ColorChoice, Verbosity};

/// Benchtop: keypad calculator and well plate manager for the terminal
#[derive(Parser, Debug)]
#[command(name = "benchtop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Plate format used when a command does not name one
    #[arg(
        long,
        value_parser = parse_format,
        default_value = "96",
        env = "BENCHTOP_PLATE_FORMAT",
        global = true
    )]
    pub default_format: PlateFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the effective configuration from the global flags
    #[must_use]
    pub fn config(&self) -> CliConfig {
        CliConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_color(self.color.into())
            .with_default_format(self.default_format)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive calculator
    Calc,

    /// Evaluate one expression and print the result
    Eval(EvalArgs),

    /// Press keypad buttons in order and print the final display
    Keys(KeysArgs),

    /// Open the interactive well plate manager
    Plate(PlateArgs),

    /// Print the grid definition table of a plate
    Grid(GridArgs),

    /// Print the grid position of a well label
    Well(WellArgs),

    /// Show the effective configuration
    Config,
}

impl Commands {
    /// Whether the command takes over the terminal
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Calc | Self::Plate(_))
    }
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Arithmetic expression, e.g. "42 * (3 + 7)"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Exit with a failure code when evaluation fails
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Keypad labels: 0-9, 00, ., +, -, *, /, (, ), =, C
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Arguments for the plate command
#[derive(Parser, Debug)]
pub struct PlateArgs {
    /// Open a new plate of this format directly (96 or 384)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<PlateFormat>,
}

/// Arguments for the grid command
#[derive(Parser, Debug)]
pub struct GridArgs {
    /// Plate format (96 or 384)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<PlateFormat>,

    /// Print the full cell table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the well command
#[derive(Parser, Debug)]
pub struct WellArgs {
    /// Well label, e.g. H12
    pub label: String,

    /// Plate format (96 or 384)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<PlateFormat>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Auto-detect
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

fn parse_format(value: &str) -> Result<PlateFormat, PlateError> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("benchtop").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_eval_args() {
        let cli = parse(&["eval", "2 + 3", "--strict"]);
        match cli.command {
            Commands::Eval(args) => {
                assert_eq!(args.expression, "2 + 3");
                assert!(args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_eval_accepts_leading_minus() {
        let cli = parse(&["eval", "-4*2"]);
        assert!(matches!(cli.command, Commands::Eval(ref args) if args.expression == "-4*2"));
    }

    #[test]
    fn test_keys_with_operators() {
        let cli = parse(&["keys", "7", "-", "9", "="]);
        match cli.command {
            Commands::Keys(args) => assert_eq!(args.keys, ["7", "-", "9", "="]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_keys_requires_one_key() {
        assert!(Cli::try_parse_from(["benchtop", "keys"]).is_err());
    }

    #[test]
    fn test_format_values() {
        let cli = parse(&["grid", "--format", "384"]);
        assert!(matches!(
            cli.command,
            Commands::Grid(GridArgs {
                format: Some(PlateFormat::Wells384),
                json: false
            })
        ));

        let cli = parse(&["plate", "--format", "96-well"]);
        assert!(matches!(
            cli.command,
            Commands::Plate(PlateArgs {
                format: Some(PlateFormat::Wells96)
            })
        ));

        assert!(Cli::try_parse_from(["benchtop", "grid", "--format", "48"]).is_err());
    }

    #[test]
    fn test_global_flags_build_config() {
        let cli = parse(&["-vv", "--color", "never", "--default-format", "384", "config"]);
        let config = cli.config();
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.default_format, PlateFormat::Wells384);

        let cli = parse(&["well", "A1", "-q", "-v"]);
        assert_eq!(cli.config().verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_interactive_commands() {
        assert!(parse(&["calc"]).command.is_interactive());
        assert!(parse(&["plate"]).command.is_interactive());
        assert!(!parse(&["eval", "1"]).command.is_interactive());
        assert!(!parse(&["config"]).command.is_interactive());
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
