//! Display buffer: the calculator's only mutable state
//!
//! Two states. In `Normal` the buffer holds a partial expression or the last
//! result; in `Error` it holds [`ERROR_MSG`] and the next input press starts
//! a fresh buffer.

use tracing::{debug, trace};

use crate::core::evaluator::Evaluator;
use crate::core::{format_result, CalcResult, ERROR_MSG};
use crate::keypad::ButtonAction;

/// Display state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Buffer holds an expression or a result
    #[default]
    Normal,
    /// Buffer holds the error sentinel
    Error,
}

/// Outcome of an `=` press
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Buffer contents that were evaluated
    pub expression: String,
    /// Numeric result or the reason evaluation failed
    pub outcome: CalcResult<f64>,
}

/// The calculator display and its state machine
#[derive(Debug, Default)]
pub struct DisplayBuffer {
    text: String,
    state: DisplayState,
    evaluator: Evaluator,
}

impl DisplayBuffer {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the displayed text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the current state
    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// Returns true while the error sentinel is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state == DisplayState::Error
    }

    /// Handles one button press. Returns the evaluation when `=` was pressed.
    pub fn press(&mut self, action: ButtonAction) -> Option<Evaluation> {
        trace!(?action, state = ?self.state, "button pressed");
        match action {
            ButtonAction::Clear => {
                self.clear();
                None
            }
            ButtonAction::Equals => Some(self.evaluate()),
            other => {
                if let Some(text) = other.text() {
                    self.append(&text);
                }
                None
            }
        }
    }

    /// Appends input text, starting over first if the sentinel is shown
    pub fn append(&mut self, text: &str) {
        if self.is_error() {
            self.clear();
        }
        self.text.push_str(text);
    }

    /// Removes the last character; on the sentinel, clears instead
    pub fn backspace(&mut self) {
        if self.is_error() {
            self.clear();
        } else {
            self.text.pop();
        }
    }

    /// Empties the buffer and returns to `Normal`
    pub fn clear(&mut self) {
        self.text.clear();
        self.state = DisplayState::Normal;
    }

    /// Replaces the buffer with `text` in `Normal` state
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.state = DisplayState::Normal;
    }

    /// Evaluates the buffer and shows the result or the sentinel
    pub fn evaluate(&mut self) -> Evaluation {
        let expression = std::mem::take(&mut self.text);
        let outcome = self.evaluator.evaluate_str(&expression);
        match &outcome {
            Ok(value) => {
                self.text = format_result(*value);
                self.state = DisplayState::Normal;
                debug!(%expression, result = %self.text, "display evaluated");
            }
            Err(err) => {
                self.text = ERROR_MSG.to_string();
                self.state = DisplayState::Error;
                debug!(%expression, error = %err, "display evaluation failed");
            }
        }
        Evaluation {
            expression,
            outcome,
        }
    }
}
