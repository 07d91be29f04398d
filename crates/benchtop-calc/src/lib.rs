//! Benchtop calculator
//!
//! A keypad calculator: a display buffer fed by button presses and evaluated
//! by a small arithmetic parser. Any failed evaluation shows the fixed
//! [`ERROR_MSG`](core::ERROR_MSG) sentinel; the next input press starts over.
//!
//! # Example
//!
//! ```rust
//! use benchtop_calc::prelude::*;
//!
//! assert_eq!(evaluate_expression("42 * (3 + 7)"), "420");
//! assert_eq!(evaluate_expression("5 / 0"), ERROR_MSG);
//!
//! let mut driver = HeadlessDriver::new();
//! driver.press_labels(&["2", "+", "3", "="]).unwrap();
//! assert_eq!(driver.display(), "5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{evaluate_expression, Evaluator};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{format_result, CalcError, CalcResult, Calculator, Operation, ERROR_MSG};
    pub use crate::display::{DisplayBuffer, DisplayState, Evaluation};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::keypad::{ButtonAction, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
