//! Terminal front end for the plate manager

mod app;
mod input;
mod ui;

use std::io;

use crossterm::event;
use ratatui::{backend::Backend, layout::Rect, Terminal};

use crate::model::PlateModel;

pub use app::PlateApp;
pub use input::{InputHandler, PlateKey};
pub use ui::{
    cell_width, dropdown_area, form_area, form_field_area, grid_position_at, menu_title_areas,
    plate_layout, render, startup_button_areas, PlateLayout, PlateUI,
};

/// Runs the plate manager until the user exits.
///
/// The caller owns terminal setup and teardown.
pub fn run<B: Backend, M: PlateModel>(
    terminal: &mut Terminal<B>,
    app: &mut PlateApp<M>,
) -> io::Result<()> {
    let mut frame_area = Rect::default();

    tracing::info!(screen = ?app.controller().screen(), "plate manager started");
    while !app.should_quit() {
        terminal.draw(|frame| {
            frame_area = frame.area();
            render(app.controller(), frame);
        })?;
        app.handle_event(&event::read()?, frame_area);
    }
    tracing::info!(
        samples = app.controller().samples_saved(),
        "plate manager closed"
    );

    Ok(())
}
