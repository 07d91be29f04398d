//! Plate manager rendering and screen geometry
//!
//! Geometry helpers are shared by rendering and mouse hit testing, so a click
//! lands on exactly what was drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::controller::{PlateController, Screen, StartupAction, MENUS};
use crate::grid::{CellKind, GridPosition, PlateFormat};
use crate::model::PlateModel;
use crate::sample::{FormField, SampleForm};

const STARTUP_BUTTON_WIDTH: u16 = 30;
const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 12;
const FORM_LABEL_WIDTH: usize = 23;

/// Areas of the plate and start-up screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateLayout {
    /// Menu bar line
    pub menu_bar: Rect,
    /// Grid or start-up buttons
    pub body: Rect,
    /// Status line
    pub status: Rect,
}

/// Splits a frame into menu bar, body and status line
#[must_use]
pub fn plate_layout(area: Rect) -> PlateLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(inner);
    PlateLayout {
        menu_bar: rows[0],
        body: rows[1],
        status: rows[2],
    }
}

/// Where each menu title sits on the menu bar, in [`MENUS`] order
#[must_use]
pub fn menu_title_areas(menu_bar: Rect) -> Vec<Rect> {
    let mut x = menu_bar.x + 1;
    MENUS
        .iter()
        .map(|menu| {
            let width = menu.title.len() as u16 + 2;
            let area = Rect::new(x, menu_bar.y, width, 1).intersection(menu_bar);
            x += width + 1;
            area
        })
        .collect()
}

/// The drop-down box of an open menu
#[must_use]
pub fn dropdown_area(area: Rect, menu: usize) -> Rect {
    let layout = plate_layout(area);
    let titles = menu_title_areas(layout.menu_bar);
    let (Some(title), Some(entry)) = (titles.get(menu), MENUS.get(menu)) else {
        return Rect::default();
    };
    let width = entry
        .items
        .iter()
        .map(|item| item.label().len())
        .max()
        .unwrap_or(0) as u16
        + 4;
    let height = entry.items.len() as u16 + 2;
    Rect::new(title.x, layout.menu_bar.y + 1, width, height).intersection(area)
}

/// Width of one grid cell on screen
#[must_use]
pub const fn cell_width(format: PlateFormat) -> u16 {
    match format {
        PlateFormat::Wells96 => 5,
        PlateFormat::Wells384 => 3,
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && y >= area.y && x < area.x + area.width && y < area.y + area.height
}

/// Grid position under a screen coordinate, headers included
#[must_use]
pub fn grid_position_at(body: Rect, format: PlateFormat, x: u16, y: u16) -> Option<GridPosition> {
    if !contains(body, x, y) {
        return None;
    }
    let col = ((x - body.x) / cell_width(format)) as usize;
    let row = (y - body.y) as usize;
    (row <= format.rows() && col <= format.cols()).then_some(GridPosition::new(row, col))
}

/// Start-up buttons, in [`StartupAction::ALL`] order
#[must_use]
pub fn startup_button_areas(area: Rect) -> Vec<Rect> {
    let body = plate_layout(area).body;
    let width = STARTUP_BUTTON_WIDTH.min(body.width);
    let x = body.x + (body.width - width) / 2;
    (0..StartupAction::ALL.len() as u16)
        .map(|i| Rect::new(x, body.y + 1 + i * 2, width, 1).intersection(body))
        .collect()
}

/// The sample form popup, centred on the frame
#[must_use]
pub fn form_area(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = FORM_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Screen line of a form field inside the popup
#[must_use]
pub fn form_field_area(popup: Rect, field: FormField) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(popup);
    let index = FormField::ALL.iter().position(|&f| f == field).unwrap_or(0) as u16;
    // blank line before the button
    let line = if field == FormField::Save { index + 1 } else { index };
    Rect::new(inner.x + 1, inner.y + line, inner.width.saturating_sub(2), 1).intersection(inner)
}

/// Renders the plate manager to the frame
pub fn render<M: PlateModel>(controller: &PlateController<M>, frame: &mut Frame) {
    frame.render_widget(PlateUI::new(controller), frame.area());
}

/// Plate manager widget
#[derive(Debug)]
pub struct PlateUI<'a, M: PlateModel> {
    controller: &'a PlateController<M>,
}

impl<'a, M: PlateModel> PlateUI<'a, M> {
    /// Creates the widget
    #[must_use]
    pub const fn new(controller: &'a PlateController<M>) -> Self {
        Self { controller }
    }

    fn render_startup(&self, area: Rect, buf: &mut Buffer) {
        let selected = self.controller.startup_selected();
        for (action, button) in StartupAction::ALL.iter().zip(startup_button_areas(area)) {
            let style = if *action == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Paragraph::new(Span::styled(format!("[ {} ]", action.label()), style))
                .alignment(Alignment::Center)
                .render(button, buf);
        }
    }

    fn render_menu_bar(&self, menu_bar: Rect, buf: &mut Buffer) {
        let open = self.controller.menu().map(|state| state.menu);
        let titles = menu_title_areas(menu_bar);
        for (index, (menu, title_area)) in MENUS.iter().zip(titles).enumerate() {
            if title_area.is_empty() {
                continue;
            }
            let style = if open == Some(index) {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_span(
                title_area.x,
                title_area.y,
                &Span::styled(format!(" {} ", menu.title), style),
                title_area.width,
            );
        }
    }

    fn render_grid(&self, body: Rect, buf: &mut Buffer) {
        let Some(grid) = self.controller.grid() else {
            return;
        };
        let format = grid.format();
        let width = cell_width(format);
        let cursor = self.controller.cursor();

        for cell in grid.cells() {
            let x = body.x + cell.position.col as u16 * width;
            let y = body.y + cell.position.row as u16;
            if !contains(body, x, y) {
                continue;
            }
            let (text, style) = match cell.kind {
                CellKind::Corner => (String::new(), Style::default()),
                CellKind::ColumnHeader | CellKind::RowHeader => (
                    cell.label.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                CellKind::Well => {
                    let text = match format {
                        PlateFormat::Wells96 => cell.label.clone(),
                        PlateFormat::Wells384 => "o".to_string(),
                    };
                    let style = if cell.position == cursor {
                        Style::default().fg(Color::Black).bg(Color::Green)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    (text, style)
                }
            };
            let shown = format!("{text:>w$}", w = width as usize - 1);
            buf.set_span(x, y, &Span::styled(shown, style), width);
        }
    }

    fn render_dropdown(&self, area: Rect, buf: &mut Buffer) {
        let Some(state) = self.controller.menu() else {
            return;
        };
        let Some(menu) = MENUS.get(state.menu) else {
            return;
        };
        let dropdown = dropdown_area(area, state.menu);
        Clear.render(dropdown, buf);
        let lines: Vec<Line> = menu
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == state.item {
                    Style::default().fg(Color::Black).bg(Color::White)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!(" {} ", item.label()), style))
            })
            .collect();
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(dropdown, buf);
    }

    fn render_form(form: &SampleForm, area: Rect, buf: &mut Buffer) {
        let popup = form_area(area);
        Clear.render(popup, buf);
        Block::default()
            .title(format!(" {} ", form.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(popup, buf);

        for field in FormField::ALL {
            let line_area = form_field_area(popup, field);
            // clipped below a short popup
            if line_area.is_empty() {
                continue;
            }
            let focused = form.focus() == field;
            let line = if field == FormField::Save {
                let style = if focused {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(Span::styled(format!("[ {} ]", field.label()), style))
            } else {
                let value = if field == FormField::SampleType {
                    format!("< {} >", form.value(field))
                } else if focused {
                    format!("{}_", form.value(field))
                } else {
                    form.value(field).to_string()
                };
                let value_style = if focused {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:<w$}", field.label(), w = FORM_LABEL_WIDTH),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(value, value_style),
                ])
            };
            buf.set_line(line_area.x, line_area.y, &line, line_area.width);
        }

        let inner = Block::default().borders(Borders::ALL).inner(popup);
        if !inner.is_empty() {
            let footer_y = inner.y + inner.height - 1;
            let footer = match form.error() {
                Some(err) => Span::styled(err.to_string(), Style::default().fg(Color::Red)),
                None => Span::styled(
                    "Tab next field, Enter save, Esc cancel",
                    Style::default().fg(Color::DarkGray),
                ),
            };
            buf.set_span(inner.x + 1, footer_y, &footer, inner.width.saturating_sub(2));
        }
    }
}

impl<M: PlateModel> Widget for PlateUI<'_, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" {} ", self.controller.window_title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = plate_layout(area);
        match self.controller.screen() {
            Screen::Startup => self.render_startup(area, buf),
            Screen::Plate | Screen::SampleForm => {
                self.render_menu_bar(layout.menu_bar, buf);
                self.render_grid(layout.body, buf);
            }
        }

        let mut status = self.controller.status().to_string();
        if let Some(label) = self
            .controller
            .cursor_label()
            .filter(|_| self.controller.screen() == Screen::Plate)
        {
            status = format!("{label} | {status}");
        }
        Paragraph::new(Span::styled(status, Style::default().fg(Color::DarkGray)))
            .render(layout.status, buf);

        self.render_dropdown(area, buf);
        if let Some(form) = self.controller.form() {
            Self::render_form(form, area, buf);
        }
    }
}
