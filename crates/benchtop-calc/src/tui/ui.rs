//! Calculator screen rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::display::DisplayState;

/// Window title
pub const TITLE: &str = " Calculator ";

/// Key bindings shown in the help panel
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Evaluate"),
    ("Esc/c", "Clear"),
    ("Bksp", "Delete"),
    ("↑", "Recall"),
    ("Click", "Press key"),
    ("q", "Quit"),
];

const CALC_COLUMN_WIDTH: u16 = 29;
const DISPLAY_HEIGHT: u16 = 3;
const KEYPAD_MIN_HEIGHT: u16 = 10;

struct Areas {
    display: Rect,
    keypad: Rect,
    history: Rect,
    help: Rect,
    status: Rect,
}

fn split(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CALC_COLUMN_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(KEYPAD_MIN_HEIGHT),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(HELP_SHORTCUTS.len() as u16 + 2),
        ])
        .split(columns[1]);

    Areas {
        display: left[0],
        keypad: left[1],
        history: right[0],
        help: right[1],
        status: rows[1],
    }
}

/// Returns where the keypad is drawn inside a frame of the given size
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split(area).keypad
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.display_state() == DisplayState::Error {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display_text(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .app
            .history()
            .iter_rev()
            .take(visible)
            .map(|entry| {
                ListItem::new(Span::styled(
                    entry.display(),
                    Style::default().fg(Color::Gray),
                ))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" History ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.last_error().is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Span::styled(self.app.status(), style)).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let areas = split(area);
        self.render_display(areas.display, buf);
        KeypadWidget::new(self.app.keypad()).render(areas.keypad, buf);
        self.render_history(areas.history, buf);
        Self::render_help(areas.help, buf);
        self.render_status(areas.status, buf);
    }
}
