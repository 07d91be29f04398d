//! Keypad scenarios run against every calculator driver

use benchtop_calc::prelude::*;

fn scenario_addition<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["2", "+", "3", "="]).unwrap();
    assert_eq!(driver.display(), "5");
}

fn scenario_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["5", "/", "0", "="]).unwrap();
    assert_eq!(driver.display(), ERROR_MSG);
    driver.press_labels(&["1"]).unwrap();
    assert_eq!(driver.display(), "1");
}

/// One driver, no clear between steps: the result of `2 + 3` stays on the
/// display and the division keys append to it.
fn scenario_full_session<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["2", "+", "3", "="]).unwrap();
    assert_eq!(driver.display(), "5");
    driver.press_labels(&["5", "/", "0", "="]).unwrap();
    assert_eq!(driver.display(), ERROR_MSG);
    driver.press_labels(&["1"]).unwrap();
    assert_eq!(driver.display(), "1");
}

fn scenario_precedence_and_parens<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["2", "+", "3", "*", "4", "="]).unwrap();
    assert_eq!(driver.display(), "14");
    driver.clear();
    driver.press_labels(&["(", "2", "+", "3", ")", "*", "4", "="]).unwrap();
    assert_eq!(driver.display(), "20");
}

fn scenario_double_zero_and_decimals<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["1", "00", "/", "8", "="]).unwrap();
    assert_eq!(driver.display(), "12.5");
    driver.clear();
    driver.press_labels(&[".", "5", "+", "5", ".", "="]).unwrap();
    assert_eq!(driver.display(), "5.5");
}

fn scenario_chained_results<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["9", "-", "1", "2", "="]).unwrap();
    assert_eq!(driver.display(), "-3");
    driver.press_labels(&["*", "-", "3", "="]).unwrap();
    assert_eq!(driver.display(), "9");
}

fn scenario_clear_resets<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["7", "7"]).unwrap();
    driver.clear();
    assert_eq!(driver.display(), "");
    driver.press_labels(&["(", "="]).unwrap();
    assert_eq!(driver.display(), ERROR_MSG);
    driver.press_labels(&["="]).unwrap();
    assert_eq!(driver.display(), ERROR_MSG);
    driver.clear();
    assert_eq!(driver.display(), "");
}

fn run_all<D: CalculatorDriver>(make: impl Fn() -> D) {
    scenario_addition(&mut make());
    scenario_error_recovery(&mut make());
    scenario_full_session(&mut make());
    scenario_precedence_and_parens(&mut make());
    scenario_double_zero_and_decimals(&mut make());
    scenario_chained_results(&mut make());
    scenario_clear_resets(&mut make());
}

#[test]
fn headless_driver_scenarios() {
    run_all(HeadlessDriver::new);
}

#[cfg(feature = "tui")]
#[test]
fn tui_driver_scenarios() {
    run_all(TuiDriver::new);
}

#[cfg(feature = "tui")]
#[test]
fn tui_driver_records_only_successes() {
    let mut driver = TuiDriver::new();
    driver.press_labels(&["1", "+", "1", "="]).unwrap();
    driver.press_labels(&["/", "0", "="]).unwrap();
    driver.press_labels(&["3", "="]).unwrap();
    let expressions: Vec<_> = driver
        .app()
        .history()
        .iter_rev()
        .map(|entry| entry.expression.clone())
        .collect();
    assert_eq!(expressions, vec!["3", "1+1"]);
}
