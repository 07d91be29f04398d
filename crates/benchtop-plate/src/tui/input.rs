//! Keyboard input mapping
//!
//! Keys map to screen-independent [`PlateKey`]s; the app decides what each
//! one means on the current screen (`q` quits from the grid but is typed
//! into the sample form).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::MenuItem;

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateKey {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Enter
    Enter,
    /// Escape
    Escape,
    /// Tab
    NextField,
    /// Shift+Tab
    PrevField,
    /// Backspace
    Backspace,
    /// A printable character
    Char(char),
    /// Open the menu bar at a menu
    OpenMenu(usize),
    /// Menu shortcut
    Command(MenuItem),
    /// Leave immediately
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to [`PlateKey`]s
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> PlateKey {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return PlateKey::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => PlateKey::Quit,
                KeyCode::Char('n') => PlateKey::Command(MenuItem::New),
                KeyCode::Char('o') => PlateKey::Command(MenuItem::Open),
                KeyCode::Char('s') => PlateKey::Command(MenuItem::Save),
                KeyCode::Char('q') => PlateKey::Command(MenuItem::Exit),
                KeyCode::Char('f') => PlateKey::Command(MenuItem::Find),
                KeyCode::Char('r') => PlateKey::Command(MenuItem::Replace),
                _ => PlateKey::None,
            };
        }

        match code {
            KeyCode::Up => PlateKey::Up,
            KeyCode::Down => PlateKey::Down,
            KeyCode::Left => PlateKey::Left,
            KeyCode::Right => PlateKey::Right,
            KeyCode::Enter => PlateKey::Enter,
            KeyCode::Esc => PlateKey::Escape,
            KeyCode::Tab => PlateKey::NextField,
            KeyCode::BackTab => PlateKey::PrevField,
            KeyCode::Backspace => PlateKey::Backspace,
            KeyCode::F(1) => PlateKey::Command(MenuItem::Help),
            KeyCode::F(10) => PlateKey::OpenMenu(0),
            KeyCode::Char(c) => PlateKey::Char(c),
            _ => PlateKey::None,
        }
    }
}
