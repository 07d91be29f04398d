//! AST evaluator and the string-in, string-out model used by the display

use tracing::debug;

use crate::core::parser::{AstNode, Parser};
use crate::core::{format_result, CalcResult, Calculator, Operation, ERROR_MSG};

/// Evaluator for AST expressions
#[derive(Debug, Default)]
pub struct Evaluator {
    calculator: Calculator,
}

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => {
                let value = self.evaluate(inner)?;
                self.calculator.calculate(0.0, value, Operation::Subtract)
            }
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.calculator.calculate(left_val, right_val, *op)
            }
        }
    }

    /// Evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

/// Evaluates `expression` and returns the text the display should show:
/// the formatted result, or [`ERROR_MSG`] on any failure.
#[must_use]
pub fn evaluate_expression(expression: &str) -> String {
    match Evaluator::new().evaluate_str(expression) {
        Ok(value) => {
            let shown = format_result(value);
            debug!(expression, result = %shown, "evaluated");
            shown
        }
        Err(err) => {
            debug!(expression, error = %err, "evaluation failed");
            ERROR_MSG.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    #[test]
    fn test_evaluate_number() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_negate() {
        let eval = Evaluator::new();
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(eval.evaluate(&ast), Ok(5.0));
    }

    #[test]
    fn test_evaluate_nested() {
        let eval = Evaluator::new();
        // ((1 + 2) * (3 + 4)) = 21
        let ast = AstNode::binary(
            AstNode::binary(AstNode::number(1.0), Operation::Add, AstNode::number(2.0)),
            Operation::Multiply,
            AstNode::binary(AstNode::number(3.0), Operation::Add, AstNode::number(4.0)),
        );
        assert_eq!(eval.evaluate(&ast), Ok(21.0));
    }

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3*4"), Ok(14.0));
        assert_eq!(eval.evaluate_str("(2+3)*4"), Ok(20.0));
        assert_eq!(eval.evaluate_str("10-4-3"), Ok(3.0));
        assert_eq!(eval.evaluate_str("8/4/2"), Ok(1.0));
        assert_eq!(eval.evaluate_str("-5+10"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_str_errors() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("5/0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval.evaluate_str("5/(2-2)"), Err(CalcError::DivisionByZero));
        assert_eq!(eval.evaluate_str(""), Err(CalcError::EmptyExpression));
        assert!(matches!(
            eval.evaluate_str("1++"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_evaluate_expression_success() {
        assert_eq!(evaluate_expression("2+3"), "5");
        assert_eq!(evaluate_expression("5/2"), "2.5");
        assert_eq!(evaluate_expression("00+7"), "7");
        assert_eq!(evaluate_expression("1.5*2"), "3");
        assert_eq!(evaluate_expression("-(2+3)"), "-5");
    }

    #[test]
    fn test_evaluate_expression_sentinel() {
        for input in ["5/0", "", "(", "2+", "abc", "1e5", "9/(3-3)"] {
            assert_eq!(evaluate_expression(input), ERROR_MSG, "input {input:?}");
        }
    }

    #[test]
    fn test_evaluate_expression_overflow_is_sentinel() {
        let huge = format!("1{}", "0".repeat(300));
        let expr = format!("{huge}*{huge}");
        assert_eq!(evaluate_expression(&expr), ERROR_MSG);
    }
}
