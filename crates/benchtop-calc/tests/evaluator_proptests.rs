//! Property tests for the evaluator and the display buffer

use benchtop_calc::prelude::*;
use proptest::prelude::*;

/// Expression tree rendered fully parenthesised
#[derive(Debug, Clone)]
enum Expr {
    Num(String),
    Neg(Box<Expr>),
    Bin(Box<Expr>, Operation, Box<Expr>),
}

impl Expr {
    fn render(&self) -> String {
        match self {
            Self::Num(text) => text.clone(),
            Self::Neg(inner) => format!("-({})", inner.render()),
            Self::Bin(left, op, right) => {
                format!("({}{}{})", left.render(), op.symbol(), right.render())
            }
        }
    }

    /// Straight f64 arithmetic; `None` where the calculator must fail
    fn reference(&self) -> Option<f64> {
        let value = match self {
            Self::Num(text) => text.parse().ok()?,
            Self::Neg(inner) => 0.0 - inner.reference()?,
            Self::Bin(left, op, right) => {
                let (a, b) = (left.reference()?, right.reference()?);
                match op {
                    Operation::Add => a + b,
                    Operation::Subtract => a - b,
                    Operation::Multiply => a * b,
                    Operation::Divide if b == 0.0 => return None,
                    Operation::Divide => a / b,
                }
            }
        };
        value.is_finite().then_some(value)
    }
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(int, frac)| format!("{int}.{frac}")),
        (0u32..100).prop_map(|frac| format!(".{frac}")),
    ]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    number_strategy()
        .prop_map(Expr::Num)
        .prop_recursive(4, 32, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
                (inner.clone(), operation_strategy(), inner)
                    .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r))),
            ]
        })
}

fn malformed_strategy() -> impl Strategy<Value = String> {
    (expr_strategy(), operation_strategy(), 0usize..4).prop_map(|(expr, op, shape)| {
        let text = expr.render();
        match shape {
            0 => format!("{text}{}", op.symbol()),
            1 => format!("){text}"),
            2 => format!("{text}("),
            _ => format!("{text}{}{}", op.symbol(), Operation::Multiply.symbol()),
        }
    })
}

fn action_strategy() -> impl Strategy<Value = ButtonAction> {
    prop_oneof![
        (0u8..=9).prop_map(ButtonAction::Digit),
        Just(ButtonAction::DoubleZero),
        Just(ButtonAction::Decimal),
        operation_strategy().prop_map(ButtonAction::Operator),
        Just(ButtonAction::OpenParen),
        Just(ButtonAction::CloseParen),
        Just(ButtonAction::Equals),
        Just(ButtonAction::Clear),
    ]
}

fn type_text(display: &mut DisplayBuffer, text: &str) {
    for ch in text.chars() {
        let action = ButtonAction::from_char(ch).expect("keypad character");
        display.press(action);
    }
}

proptest! {
    /// Valid expressions evaluate to the reference value, formatted
    #[test]
    fn prop_matches_reference(expr in expr_strategy()) {
        let expected = expr
            .reference()
            .map_or_else(|| ERROR_MSG.to_string(), format_result);
        prop_assert_eq!(evaluate_expression(&expr.render()), expected);
    }

    /// Typing an expression on the keypad then `=` shows what the evaluator returns
    #[test]
    fn prop_keypad_matches_evaluator(expr in expr_strategy()) {
        let text = expr.render();
        let mut display = DisplayBuffer::new();
        type_text(&mut display, &text);
        prop_assert_eq!(display.text(), text.as_str());
        display.press(ButtonAction::Equals);
        prop_assert_eq!(display.text(), evaluate_expression(&text));
    }

    /// Malformed input shows the sentinel and the next press starts over
    #[test]
    fn prop_malformed_then_fresh_start(text in malformed_strategy(), digit in 0u8..=9) {
        prop_assert_eq!(evaluate_expression(&text), ERROR_MSG);

        let mut display = DisplayBuffer::new();
        type_text(&mut display, &text);
        display.press(ButtonAction::Equals);
        prop_assert!(display.is_error());
        prop_assert_eq!(display.text(), ERROR_MSG);

        display.press(ButtonAction::Digit(digit));
        prop_assert!(!display.is_error());
        prop_assert_eq!(display.text(), digit.to_string());
    }

    /// Clear empties the buffer from any state
    #[test]
    fn prop_clear_always_empties(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut display = DisplayBuffer::new();
        for action in actions {
            display.press(action);
        }
        display.press(ButtonAction::Clear);
        prop_assert_eq!(display.text(), "");
        prop_assert_eq!(display.state(), DisplayState::Normal);
    }

    /// Arbitrary text never panics and yields either a number or the sentinel
    #[test]
    fn prop_arbitrary_input_total(input in ".{0,40}") {
        let shown = evaluate_expression(&input);
        prop_assert!(shown == ERROR_MSG || shown.parse::<f64>().is_ok(), "{}", shown);
    }
}
