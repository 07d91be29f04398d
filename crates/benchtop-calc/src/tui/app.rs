//! Terminal calculator application state

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyAction};
use super::ui::keypad_area;
use crate::core::history::History;
use crate::core::CalcError;
use crate::display::{DisplayBuffer, DisplayState};
use crate::keypad::{ButtonAction, Keypad};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    display: DisplayBuffer,
    keypad: Keypad,
    history: History,
    last_error: Option<CalcError>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the displayed text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    /// Returns the display state
    #[must_use]
    pub const fn display_state(&self) -> DisplayState {
        self.display.state()
    }

    /// Returns the keypad (with highlight state)
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the calculation history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the error behind the sentinel, if one is shown
    #[must_use]
    pub const fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a keypad button
    pub fn press(&mut self, action: ButtonAction) {
        self.keypad.highlight(action);
        if let Some(evaluation) = self.display.press(action) {
            match evaluation.outcome {
                Ok(value) => {
                    self.history.record(&evaluation.expression, value);
                    self.last_error = None;
                }
                Err(err) => self.last_error = Some(err),
            }
        } else if !self.display.is_error() {
            self.last_error = None;
        }
    }

    /// Deletes the last character
    pub fn backspace(&mut self) {
        self.keypad.release_all();
        self.display.backspace();
        self.last_error = None;
    }

    /// Loads the last evaluated expression back into the display
    pub fn recall_last(&mut self) {
        if let Some(entry) = self.history.last() {
            let expression = entry.expression.clone();
            self.display.set_text(&expression);
            self.last_error = None;
        }
    }

    /// Presses the button under a mouse click, if any
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> bool {
        match self.keypad.hit_test(keypad_area, x, y) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Applies a keyboard action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(button) => self.press(button),
            KeyAction::Backspace => self.backspace(),
            KeyAction::RecallLast => self.recall_last(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Dispatches one terminal event. `frame_area` is the size of the last
    /// drawn frame, used to locate the keypad for mouse clicks.
    pub fn handle_event(&mut self, event: &Event, frame_area: Rect) {
        match event {
            Event::Key(key) => self.apply(InputHandler::new().handle_key(*key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.click(keypad_area(frame_area), *column, *row);
            }
            _ => {}
        }
    }

    /// Status line text
    #[must_use]
    pub fn status(&self) -> String {
        match &self.last_error {
            Some(err) => format!("Error: {err}"),
            None => "Ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ERROR_MSG;

    fn press_labels(app: &mut CalculatorApp, labels: &[&str]) {
        for label in labels {
            app.press(ButtonAction::from_label(label).unwrap());
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert!(app.display_text().is_empty());
        assert!(app.history().is_empty());
        assert!(!app.should_quit());
        assert_eq!(app.status(), "Ready");
    }

    #[test]
    fn test_press_records_history_on_success() {
        let mut app = CalculatorApp::new();
        press_labels(&mut app, &["2", "+", "3", "="]);
        assert_eq!(app.display_text(), "5");
        assert_eq!(app.history().last().unwrap().expression, "2+3");
    }

    #[test]
    fn test_press_error_sets_status() {
        let mut app = CalculatorApp::new();
        press_labels(&mut app, &["5", "/", "0", "="]);
        assert_eq!(app.display_text(), ERROR_MSG);
        assert_eq!(app.display_state(), DisplayState::Error);
        assert_eq!(app.last_error(), Some(&CalcError::DivisionByZero));
        assert!(app.status().contains("Division by zero"));
        assert!(app.history().is_empty());

        press_labels(&mut app, &["1"]);
        assert_eq!(app.display_text(), "1");
        assert!(app.last_error().is_none());
    }

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        press_labels(&mut app, &["7"]);
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, "7");
    }

    #[test]
    fn test_recall_last() {
        let mut app = CalculatorApp::new();
        press_labels(&mut app, &["6", "*", "7", "="]);
        app.recall_last();
        assert_eq!(app.display_text(), "6*7");
    }

    #[test]
    fn test_recall_last_without_history() {
        let mut app = CalculatorApp::new();
        press_labels(&mut app, &["1"]);
        app.recall_last();
        assert_eq!(app.display_text(), "1");
    }

    #[test]
    fn test_backspace() {
        let mut app = CalculatorApp::new();
        press_labels(&mut app, &["1", "2"]);
        app.backspace();
        assert_eq!(app.display_text(), "1");
    }

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        // 5 cols x 4 rows, 5 wide / 2 tall buttons inside a 1-cell border
        let area = Rect::new(0, 0, 27, 10);
        assert!(app.click(area, 1, 1)); // "7"
        assert!(app.click(area, 21, 7)); // "="
        assert_eq!(app.display_text(), "7");
        assert!(!app.click(area, 0, 0)); // border
        assert!(!app.click(area, 40, 40)); // outside
    }

    #[test]
    fn test_apply_actions() {
        let mut app = CalculatorApp::new();
        app.apply(KeyAction::Press(ButtonAction::Digit(9)));
        app.apply(KeyAction::Press(ButtonAction::Digit(8)));
        app.apply(KeyAction::Backspace);
        app.apply(KeyAction::None);
        assert_eq!(app.display_text(), "9");
        app.apply(KeyAction::Press(ButtonAction::Equals));
        app.apply(KeyAction::Press(ButtonAction::Clear));
        app.apply(KeyAction::RecallLast);
        assert_eq!(app.display_text(), "9");
        app.apply(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_key_and_mouse_events() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let frame = Rect::new(0, 0, 80, 24);
        let keypad = keypad_area(frame);
        let mut app = CalculatorApp::new();

        app.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)),
            frame,
        );
        app.handle_event(
            &Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: keypad.x + 3,
                row: keypad.y + 2,
                modifiers: KeyModifiers::NONE,
            }),
            frame,
        );
        // right clicks are ignored
        app.handle_event(
            &Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Right),
                column: keypad.x + 3,
                row: keypad.y + 2,
                modifiers: KeyModifiers::NONE,
            }),
            frame,
        );
        assert_eq!(app.display_text(), "37");

        app.handle_event(&Event::Resize(100, 40), frame);
        app.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            frame,
        );
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        app.quit();
        assert!(app.should_quit());
    }
}
