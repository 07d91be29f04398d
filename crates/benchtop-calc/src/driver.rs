//! Calculator drivers
//!
//! One trait, two implementations: a headless driver over the bare display
//! buffer and a driver over the terminal app. Scenario tests are written once
//! against the trait and run against both.

use crate::core::{CalcError, CalcResult};
use crate::display::DisplayBuffer;
use crate::keypad::ButtonAction;

/// Abstract driver for keypad interactions
pub trait CalculatorDriver {
    /// Presses one keypad button
    fn press(&mut self, action: ButtonAction);

    /// Returns the displayed text
    fn display(&self) -> String;

    /// Presses buttons in order
    fn press_sequence(&mut self, actions: &[ButtonAction]) {
        for &action in actions {
            self.press(action);
        }
    }

    /// Presses the clear button
    fn clear(&mut self) {
        self.press(ButtonAction::Clear);
    }

    /// Presses buttons by label (`"7"`, `"00"`, `"+"`, `"="`, `"C"`...).
    ///
    /// Stops at the first unknown label; buttons before it stay pressed.
    fn press_labels(&mut self, labels: &[&str]) -> CalcResult<()> {
        for label in labels {
            let action = ButtonAction::from_label(label)
                .ok_or_else(|| CalcError::parse(format!("Unknown key: '{label}'")))?;
            self.press(action);
        }
        Ok(())
    }
}

/// Driver over a bare [`DisplayBuffer`]
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    display: DisplayBuffer,
}

impl HeadlessDriver {
    /// Creates a new headless driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying display buffer
    #[must_use]
    pub const fn buffer(&self) -> &DisplayBuffer {
        &self.display
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, action: ButtonAction) {
        self.display.press(action);
    }

    fn display(&self) -> String {
        self.display.text().to_string()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::keypad::ButtonAction;
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: ButtonAction) {
            self.app.press(action);
        }

        fn display(&self) -> String {
            self.app.display_text().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
