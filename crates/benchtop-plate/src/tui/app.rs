//! Event dispatch for the plate manager

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::trace;

use super::input::{InputHandler, PlateKey};
use super::ui::{
    dropdown_area, form_area, form_field_area, grid_position_at, menu_title_areas, plate_layout,
    startup_button_areas,
};
use crate::controller::{MenuItem, PlateController, Screen, StartupAction, MENUS};
use crate::model::{NullModel, PlateModel};
use crate::sample::{FormField, SampleForm};

/// Plate manager application: a controller plus input dispatch
#[derive(Debug)]
pub struct PlateApp<M: PlateModel = NullModel> {
    controller: PlateController<M>,
    input: InputHandler,
}

impl Default for PlateApp<NullModel> {
    fn default() -> Self {
        Self::new(PlateController::default())
    }
}

impl<M: PlateModel> PlateApp<M> {
    /// Wraps a controller
    pub fn new(controller: PlateController<M>) -> Self {
        Self {
            controller,
            input: InputHandler::new(),
        }
    }

    /// The controller
    #[must_use]
    pub const fn controller(&self) -> &PlateController<M> {
        &self.controller
    }

    /// The controller, for direct manipulation
    pub fn controller_mut(&mut self) -> &mut PlateController<M> {
        &mut self.controller
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    /// Dispatches one terminal event. `frame_area` is the size of the last
    /// drawn frame, used for mouse hit testing.
    pub fn handle_event(&mut self, event: &Event, frame_area: Rect) {
        match event {
            Event::Key(key) => {
                let key = self.input.handle_key(*key);
                self.apply(key);
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.click(frame_area, *column, *row),
            _ => {}
        }
    }

    /// Applies a decoded key to the current screen
    pub fn apply(&mut self, key: PlateKey) {
        trace!(?key, screen = ?self.controller.screen(), "key");
        if key == PlateKey::Quit {
            self.controller.quit();
            return;
        }
        match self.controller.screen() {
            Screen::Startup => self.apply_startup(key),
            Screen::Plate if self.controller.menu().is_some() => self.apply_menu(key),
            Screen::Plate => self.apply_plate(key),
            Screen::SampleForm => self.apply_form(key),
        }
    }

    fn apply_startup(&mut self, key: PlateKey) {
        let c = &mut self.controller;
        match key {
            PlateKey::Up | PlateKey::PrevField => c.startup_prev(),
            PlateKey::Down | PlateKey::NextField => c.startup_next(),
            PlateKey::Enter | PlateKey::Char(' ') => c.startup_activate(),
            PlateKey::Char('1') => c.choose(StartupAction::NewPlate96),
            PlateKey::Char('2') => c.choose(StartupAction::NewPlate384),
            PlateKey::Char('3') => c.choose(StartupAction::LoadLayout),
            PlateKey::Escape | PlateKey::Char('q') => c.quit(),
            PlateKey::Command(item) => c.run_menu_item(item),
            _ => {}
        }
    }

    fn apply_plate(&mut self, key: PlateKey) {
        let c = &mut self.controller;
        match key {
            PlateKey::Up => c.move_cursor(-1, 0),
            PlateKey::Down => c.move_cursor(1, 0),
            PlateKey::Left => c.move_cursor(0, -1),
            PlateKey::Right => c.move_cursor(0, 1),
            PlateKey::Enter | PlateKey::Char(' ') => {
                c.activate_cursor();
            }
            PlateKey::OpenMenu(menu) => c.open_menu(menu),
            PlateKey::Command(item) => c.run_menu_item(item),
            PlateKey::Char('q') => c.quit(),
            _ => {}
        }
    }

    fn apply_menu(&mut self, key: PlateKey) {
        let c = &mut self.controller;
        match key {
            PlateKey::Left => c.menu_step(false),
            PlateKey::Right => c.menu_step(true),
            PlateKey::Up => c.menu_item_step(false),
            PlateKey::Down => c.menu_item_step(true),
            PlateKey::Enter => c.menu_activate(),
            PlateKey::Escape | PlateKey::OpenMenu(_) => c.close_menu(),
            PlateKey::Command(item) => c.run_menu_item(item),
            _ => {}
        }
    }

    fn apply_form(&mut self, key: PlateKey) {
        let c = &mut self.controller;
        let Some(focus) = c.form().map(SampleForm::focus) else {
            return;
        };
        match key {
            PlateKey::Escape => c.cancel_form(),
            PlateKey::Command(MenuItem::Save) => submit_form(c),
            PlateKey::Enter if focus == FormField::Save => submit_form(c),
            PlateKey::Enter if focus == FormField::SampleType => {
                if let Some(form) = c.form_mut() {
                    form.cycle_type(true);
                }
            }
            PlateKey::Enter | PlateKey::NextField | PlateKey::Down => {
                if let Some(form) = c.form_mut() {
                    form.focus_next();
                }
            }
            PlateKey::PrevField | PlateKey::Up => {
                if let Some(form) = c.form_mut() {
                    form.focus_prev();
                }
            }
            PlateKey::Left | PlateKey::Right if focus == FormField::SampleType => {
                if let Some(form) = c.form_mut() {
                    form.cycle_type(key == PlateKey::Right);
                }
            }
            PlateKey::Char(' ') if focus == FormField::SampleType => {
                if let Some(form) = c.form_mut() {
                    form.cycle_type(true);
                }
            }
            PlateKey::Char(ch) => {
                if let Some(form) = c.form_mut() {
                    form.insert_char(ch);
                }
            }
            PlateKey::Backspace => {
                if let Some(form) = c.form_mut() {
                    form.backspace();
                }
            }
            _ => {}
        }
    }

    /// Handles a left click at a screen coordinate
    pub fn click(&mut self, frame_area: Rect, x: u16, y: u16) {
        let hit = |area: Rect| {
            x >= area.x && y >= area.y && x < area.x + area.width && y < area.y + area.height
        };
        let c = &mut self.controller;

        match c.screen() {
            Screen::Startup => {
                let buttons = startup_button_areas(frame_area);
                if let Some(index) = buttons.iter().position(|&b| hit(b)) {
                    c.choose(StartupAction::ALL[index]);
                }
            }
            Screen::SampleForm => {
                let popup = form_area(frame_area);
                if !hit(popup) {
                    return;
                }
                let clicked = FormField::ALL
                    .into_iter()
                    .find(|&field| hit(form_field_area(popup, field)));
                match clicked {
                    Some(FormField::Save) => submit_form(c),
                    Some(FormField::SampleType) => {
                        if let Some(form) = c.form_mut() {
                            form.set_focus(FormField::SampleType);
                            form.cycle_type(true);
                        }
                    }
                    Some(field) => {
                        if let Some(form) = c.form_mut() {
                            form.set_focus(field);
                        }
                    }
                    None => {}
                }
            }
            Screen::Plate => {
                if let Some(state) = c.menu() {
                    let dropdown = dropdown_area(frame_area, state.menu);
                    if hit(dropdown) {
                        let row = y.saturating_sub(dropdown.y + 1) as usize;
                        if let Some(&item) = MENUS[state.menu].items.get(row) {
                            if y > dropdown.y {
                                c.run_menu_item(item);
                            }
                        }
                        return;
                    }
                    c.close_menu();
                }

                let layout = plate_layout(frame_area);
                let titles = menu_title_areas(layout.menu_bar);
                if let Some(menu) = titles.iter().position(|&t| hit(t)) {
                    c.open_menu(menu);
                    return;
                }

                if let Some(position) = c
                    .format()
                    .and_then(|format| grid_position_at(layout.body, format, x, y))
                {
                    c.activate_well(position);
                }
            }
        }
    }
}

/// Saves the open form; failures stay visible in the form and status line
fn submit_form<M: PlateModel>(controller: &mut PlateController<M>) {
    if let Err(err) = controller.save_form() {
        trace!(error = %err, "form kept open");
    }
}
