//! Terminal front end for the calculator

mod app;
mod input;
mod keypad;
mod ui;

use std::io;

use crossterm::event;
use ratatui::{backend::Backend, layout::Rect, Terminal};

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::KeypadWidget;
pub use ui::{keypad_area, render, CalculatorUI};

/// Runs the calculator until the user quits.
///
/// The caller owns terminal setup and teardown.
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut app = CalculatorApp::new();
    let mut frame_area = Rect::default();

    tracing::info!("calculator started");
    while !app.should_quit() {
        terminal.draw(|frame| {
            frame_area = frame.area();
            render(&app, frame);
        })?;
        app.handle_event(&event::read()?, frame_area);
    }
    tracing::info!(evaluations = app.history().len(), "calculator closed");

    Ok(())
}
