//! Calculator keypad: the fixed button table and its lookup helpers
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ] [ C ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ] [ ( ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ] [ ) ]
//! [ 0 ] [00 ] [ . ] [ + ] [ = ]
//! ```

use crate::core::Operation;

/// Button labels and their `(row, col)` positions, row-major
pub const KEYPAD_LAYOUT: [(&str, (usize, usize)); 20] = [
    ("7", (0, 0)),
    ("8", (0, 1)),
    ("9", (0, 2)),
    ("/", (0, 3)),
    ("C", (0, 4)),
    ("4", (1, 0)),
    ("5", (1, 1)),
    ("6", (1, 2)),
    ("*", (1, 3)),
    ("(", (1, 4)),
    ("1", (2, 0)),
    ("2", (2, 1)),
    ("3", (2, 2)),
    ("-", (2, 3)),
    (")", (2, 4)),
    ("0", (3, 0)),
    ("00", (3, 1)),
    (".", (3, 2)),
    ("+", (3, 3)),
    ("=", (3, 4)),
];

/// Keypad rows
pub const KEYPAD_ROWS: usize = 4;
/// Keypad columns
pub const KEYPAD_COLS: usize = 5;

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert two zeros
    DoubleZero,
    /// Insert a decimal point
    Decimal,
    /// Insert an operator
    Operator(Operation),
    /// Open parenthesis
    OpenParen,
    /// Close parenthesis
    CloseParen,
    /// Evaluate the expression
    Equals,
    /// Clear the display
    Clear,
}

impl ButtonAction {
    /// Parses a button label (`"7"`, `"00"`, `"+"`, `"C"`, `"="`...)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "00" => Some(Self::DoubleZero),
            "C" | "c" => Some(Self::Clear),
            _ => {
                let mut chars = label.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Self::from_char(ch)
            }
        }
    }

    /// Maps a single typed character to the button it stands for
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => Operation::from_char(ch).map(Self::Operator),
        }
    }

    /// Returns the text this button appends to the display, if any
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).map(String::from),
            Self::DoubleZero => Some("00".to_string()),
            Self::Decimal => Some(".".to_string()),
            Self::Operator(op) => Some(op.symbol().to_string()),
            Self::OpenParen => Some("(".to_string()),
            Self::CloseParen => Some(")".to_string()),
            Self::Equals | Self::Clear => None,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button
    pub label: &'static str,
    /// Grid position `(row, col)`
    pub position: (usize, usize),
    /// The action this button performs
    pub action: ButtonAction,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

/// The calculator keypad, built from [`KEYPAD_LAYOUT`]
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_LAYOUT
            .iter()
            .filter_map(|&(label, position)| {
                ButtonAction::from_label(label).map(|action| KeypadButton {
                    label,
                    position,
                    action,
                    pressed: false,
                })
            })
            .collect();
        Self { buttons }
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.position == (row, col))
    }

    /// Finds a button index by its action
    #[must_use]
    pub fn find_by_action(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Highlights one button and releases the rest
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find_by_action(action) {
            self.buttons[idx].pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }
}
