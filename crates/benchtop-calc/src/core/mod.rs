//! Arithmetic core: tokenizer, parser, evaluator and result formatting
//!
//! Nothing in here executes arbitrary code. Input is limited to unsigned
//! decimal numbers, `+ - * /`, unary signs and parentheses.

pub mod evaluator;
pub mod history;
mod operations;
pub mod parser;

pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Fixed text shown on the display whenever an evaluation fails
pub const ERROR_MSG: &str = "ERROR";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is infinite or NaN
    #[error("Non-finite result: {0}")]
    NonFinite(String),
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
}

impl CalcError {
    /// Creates a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}

/// Formats a result value for the display.
///
/// Integral values print without a fraction, everything else prints with at
/// most ten decimals and no trailing zeros.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" || trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}
