//! Keyboard input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keypad::ButtonAction;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(ButtonAction),
    /// Delete the last character
    Backspace,
    /// Recall the last evaluated expression
    RecallLast,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to calculator actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('u') => KeyAction::Press(ButtonAction::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => ButtonAction::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(ButtonAction::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(ButtonAction::Clear),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Up => KeyAction::RecallLast,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_digits_press_buttons() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let digit = c.to_digit(10).unwrap() as u8;
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                KeyAction::Press(ButtonAction::Digit(digit))
            );
        }
    }

    #[test]
    fn test_operators_and_parens() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('*'))),
            KeyAction::Press(ButtonAction::Operator(Operation::Multiply))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('('))),
            KeyAction::Press(ButtonAction::OpenParen)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('.'))),
            KeyAction::Press(ButtonAction::Decimal)
        );
    }

    #[test]
    fn test_evaluate_and_clear_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Press(ButtonAction::Equals)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            KeyAction::Press(ButtonAction::Equals)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc)),
            KeyAction::Press(ButtonAction::Clear)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c'))),
            KeyAction::Press(ButtonAction::Clear)
        );
        assert_eq!(
            handler.handle_key(ctrl(KeyCode::Char('u'))),
            KeyAction::Press(ButtonAction::Clear)
        );
    }

    #[test]
    fn test_edit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(handler.handle_key(key(KeyCode::Up)), KeyAction::RecallLast);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('c'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ignored_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('x'),
            KeyCode::Char('%'),
            KeyCode::Char(' '),
            KeyCode::Left,
            KeyCode::Tab,
            KeyCode::F(1),
        ] {
            assert_eq!(handler.handle_key(key(code)), KeyAction::None, "{code:?}");
        }
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let mut event = key(KeyCode::Char('1'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }
}
