//! Command handlers
//!
//! One-shot commands compute their output here and print through
//! [`Printer`]; interactive commands hand the terminal to the library apps.

use benchtop_calc::core::evaluator::{evaluate_expression, Evaluator};
use benchtop_calc::core::ERROR_MSG;
use benchtop_calc::driver::{CalculatorDriver, HeadlessDriver};
use benchtop_calc::keypad::ButtonAction;
use benchtop_plate::grid::{parse_well, GridPosition, PlateFormat, PlateGrid};
use benchtop_plate::tui::PlateApp;
use benchtop_plate::{NullModel, PlateController};
use tracing::{debug, info};

use crate::commands::{Commands, EvalArgs, GridArgs, KeysArgs, PlateArgs, WellArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{grid_table, Printer};
use crate::terminal::run_fullscreen;

/// Runs a parsed command
pub fn execute(command: Commands, config: &CliConfig) -> CliResult<()> {
    let printer = Printer::new(config.color.should_color(), config.verbosity.is_quiet());

    match command {
        Commands::Calc => run_calc(),
        Commands::Eval(args) => {
            let shown = eval(&args)?;
            printer.display_value(&shown)?;
            Ok(())
        }
        Commands::Keys(args) => {
            let shown = keys(&args)?;
            printer.display_value(&shown)?;
            Ok(())
        }
        Commands::Plate(args) => run_plate(&args),
        Commands::Grid(args) => {
            let format = args.format.unwrap_or(config.default_format);
            if args.json {
                printer.text(&grid_json(format)?)?;
            } else {
                printer.note(&format!("{} ({})", format.title(), format))?;
                printer.text(grid_table(&PlateGrid::new(format)).trim_end())?;
            }
            Ok(())
        }
        Commands::Well(args) => {
            let format = args.format.unwrap_or(config.default_format);
            let position = well(&args, format)?;
            printer.well(&args.label.trim().to_uppercase(), position)?;
            Ok(())
        }
        Commands::Config => {
            printer.text(&config.to_json()?)?;
            Ok(())
        }
    }
}

/// Evaluates an expression to the text the display would show.
///
/// With `--strict` a failed evaluation becomes an error instead of the
/// sentinel.
pub fn eval(args: &EvalArgs) -> CliResult<String> {
    let shown = evaluate_expression(&args.expression);
    if args.strict && shown == ERROR_MSG {
        Evaluator::new().evaluate_str(&args.expression)?;
    }
    debug!(expression = %args.expression, result = %shown, "eval");
    Ok(shown)
}

/// Presses keypad labels in order and returns the final display
pub fn keys(args: &KeysArgs) -> CliResult<String> {
    let actions = args
        .keys
        .iter()
        .map(|label| {
            ButtonAction::from_label(label)
                .ok_or_else(|| CliError::invalid_argument(format!("unknown key '{label}'")))
        })
        .collect::<CliResult<Vec<_>>>()?;

    let mut driver = HeadlessDriver::new();
    driver.press_sequence(&actions);
    Ok(driver.display())
}

/// Pretty JSON grid definition
pub fn grid_json(format: PlateFormat) -> CliResult<String> {
    Ok(PlateGrid::new(format).to_json()?)
}

/// Resolves a well label strictly against a format
pub fn well(args: &WellArgs, format: PlateFormat) -> CliResult<GridPosition> {
    Ok(parse_well(&args.label, format)?)
}

fn run_calc() -> CliResult<()> {
    info!("starting calculator");
    run_fullscreen(|terminal| benchtop_calc::tui::run(terminal))?;
    Ok(())
}

fn run_plate(args: &PlateArgs) -> CliResult<()> {
    let controller = match args.format {
        Some(format) => PlateController::with_format(NullModel, format),
        None => PlateController::new(NullModel),
    };
    let mut app = PlateApp::new(controller);

    info!(format = ?args.format, "starting plate manager");
    run_fullscreen(|terminal| benchtop_plate::tui::run(terminal, &mut app))?;
    info!(samples = app.controller().samples_saved(), "plate manager exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtop_calc::core::CalcError;
    use benchtop_plate::PlateError;

    fn eval_args(expression: &str, strict: bool) -> EvalArgs {
        EvalArgs {
            expression: expression.to_string(),
            strict,
        }
    }

    fn keys_args(keys: &[&str]) -> KeysArgs {
        KeysArgs {
            keys: keys.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_eval_results() {
        assert_eq!(eval(&eval_args("2+3", false)).unwrap(), "5");
        assert_eq!(eval(&eval_args("42 * (3 + 7)", false)).unwrap(), "420");
        assert_eq!(eval(&eval_args("7 / 2", false)).unwrap(), "3.5");
    }

    #[test]
    fn test_eval_failure_is_sentinel() {
        assert_eq!(eval(&eval_args("5/0", false)).unwrap(), ERROR_MSG);
        assert_eq!(eval(&eval_args("2 +", false)).unwrap(), ERROR_MSG);
    }

    #[test]
    fn test_eval_strict_reports_error() {
        assert!(matches!(
            eval(&eval_args("5/0", true)),
            Err(CliError::Calc(CalcError::DivisionByZero))
        ));
        assert_eq!(eval(&eval_args("1+1", true)).unwrap(), "2");
    }

    #[test]
    fn test_keys_scenarios() {
        assert_eq!(keys(&keys_args(&["2", "+", "3", "="])).unwrap(), "5");
        assert_eq!(keys(&keys_args(&["5", "/", "0", "="])).unwrap(), ERROR_MSG);
        assert_eq!(keys(&keys_args(&["1"])).unwrap(), "1");
        assert_eq!(keys(&keys_args(&["1", "00", "C"])).unwrap(), "");
    }

    #[test]
    fn test_keys_unknown_label() {
        let err = keys(&keys_args(&["2", "%", "3"])).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert!(err.to_string().contains("'%'"));
    }

    #[test]
    fn test_well_lookup() {
        let args = WellArgs {
            label: "H12".to_string(),
            format: None,
        };
        assert_eq!(
            well(&args, PlateFormat::Wells96).unwrap(),
            GridPosition::new(8, 12)
        );

        let args = WellArgs {
            label: "p24".to_string(),
            format: None,
        };
        assert_eq!(
            well(&args, PlateFormat::Wells384).unwrap(),
            GridPosition::new(16, 24)
        );
        assert!(matches!(
            well(&args, PlateFormat::Wells96),
            Err(CliError::Plate(PlateError::UnknownRow { .. }))
        ));
    }

    #[test]
    fn test_grid_json_counts() {
        let json = grid_json(PlateFormat::Wells384).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cells"].as_array().unwrap().len(), 17 * 25);
    }
}
