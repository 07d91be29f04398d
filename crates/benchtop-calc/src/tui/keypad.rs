//! Keypad widget and mouse hit testing

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonAction, Keypad, KEYPAD_COLS, KEYPAD_ROWS};

impl Keypad {
    /// Converts a click position inside the bordered keypad area to a button
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonAction> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / KEYPAD_COLS as u16;
        let btn_height = (area.height - 2) / KEYPAD_ROWS as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col).map(|btn| btn.action)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < KEYPAD_COLS as u16 * 4 || inner.height < KEYPAD_ROWS as u16 {
            return;
        }

        let btn_width = inner.width / KEYPAD_COLS as u16;
        let btn_height = inner.height / KEYPAD_ROWS as u16;

        for btn in self.keypad.buttons() {
            let (row, col) = btn.position;
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) | ButtonAction::DoubleZero | ButtonAction::Decimal => {
                        Style::default().fg(Color::White)
                    }
                    ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::Clear => Style::default().fg(Color::Red),
                    ButtonAction::OpenParen | ButtonAction::CloseParen => {
                        Style::default().fg(Color::Cyan)
                    }
                }
            };

            let label = format!("[{}]", btn.label);
            let label_x = x + btn_width.saturating_sub(label.len() as u16) / 2;
            let label_y = y + btn_height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
        }
    }
}
