//! Plate manager controller
//!
//! Owns every piece of mutable state in the plate manager: which screen is
//! showing, the grid for the chosen format, the well cursor, the open menu and
//! the sample form. Front ends translate input into calls on
//! [`PlateController`] and draw what it exposes.

use tracing::{debug, info, warn};

use crate::error::{PlateError, PlateResult};
use crate::grid::{parse_well, GridPosition, PlateFormat, PlateGrid};
use crate::model::{NullModel, PlateModel};
use crate::sample::SampleForm;

/// Title shown before a plate format is chosen
pub const STARTUP_TITLE: &str = "WellPlate";

/// Screens of the plate manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Format selection
    Startup,
    /// The plate grid
    Plate,
    /// Sample entry for one well
    SampleForm,
}

/// Start-up screen choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupAction {
    /// Open an empty 96-well plate
    NewPlate96,
    /// Open an empty 384-well plate
    NewPlate384,
    /// Ask the model for a stored layout
    LoadLayout,
}

impl StartupAction {
    /// Choices in display order
    pub const ALL: [Self; 3] = [Self::NewPlate96, Self::NewPlate384, Self::LoadLayout];

    /// Button text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewPlate96 => "New 96-Well Plate",
            Self::NewPlate384 => "New 384-Well Plate",
            Self::LoadLayout => "Load Plate Layout",
        }
    }
}

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Back to the start-up screen
    New,
    /// Load a layout from the model
    Open,
    /// Hand the layout to the model
    Save,
    /// Quit
    Exit,
    /// Search wells
    Find,
    /// Search and replace
    Replace,
    /// Key help
    Help,
    /// Version information
    About,
}

impl MenuItem {
    /// Entry text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Open => "Open",
            Self::Save => "Save",
            Self::Exit => "Exit",
            Self::Find => "Find",
            Self::Replace => "Replace",
            Self::Help => "Help",
            Self::About => "About",
        }
    }
}

/// A drop-down menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    /// Menu bar text
    pub title: &'static str,
    /// Entries, top to bottom
    pub items: &'static [MenuItem],
}

/// The menu bar, left to right
pub const MENUS: [Menu; 3] = [
    Menu {
        title: "File",
        items: &[MenuItem::New, MenuItem::Open, MenuItem::Save, MenuItem::Exit],
    },
    Menu {
        title: "Find",
        items: &[MenuItem::Find, MenuItem::Replace],
    },
    Menu {
        title: "Help",
        items: &[MenuItem::Help, MenuItem::About],
    },
];

/// Which menu is open and which entry is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    /// Index into [`MENUS`]
    pub menu: usize,
    /// Index into that menu's items
    pub item: usize,
}

/// Key summary shown by Help
pub const HELP_TEXT: &str =
    "Arrows move, Enter opens a well, F10 opens the menu, Ctrl+S saves, q quits";

/// The plate manager state machine
#[derive(Debug)]
pub struct PlateController<M: PlateModel = NullModel> {
    model: M,
    grid: Option<PlateGrid>,
    cursor: GridPosition,
    form: Option<SampleForm>,
    startup_selected: usize,
    menu: Option<MenuState>,
    status: String,
    samples_saved: usize,
    should_quit: bool,
}

impl Default for PlateController<NullModel> {
    fn default() -> Self {
        Self::new(NullModel)
    }
}

impl<M: PlateModel> PlateController<M> {
    /// Starts on the start-up screen
    pub fn new(model: M) -> Self {
        Self {
            model,
            grid: None,
            cursor: GridPosition::new(1, 1),
            form: None,
            startup_selected: 0,
            menu: None,
            status: "Choose a plate format".to_string(),
            samples_saved: 0,
            should_quit: false,
        }
    }

    /// Starts directly on a plate
    pub fn with_format(model: M, format: PlateFormat) -> Self {
        let mut controller = Self::new(model);
        controller.open_plate(format);
        controller
    }

    /// The current screen
    #[must_use]
    pub fn screen(&self) -> Screen {
        match (&self.form, &self.grid) {
            (Some(_), _) => Screen::SampleForm,
            (None, Some(_)) => Screen::Plate,
            (None, None) => Screen::Startup,
        }
    }

    /// Window title
    #[must_use]
    pub fn window_title(&self) -> &'static str {
        self.grid
            .as_ref()
            .map_or(STARTUP_TITLE, |grid| grid.format().title())
    }

    /// The open plate's grid
    #[must_use]
    pub const fn grid(&self) -> Option<&PlateGrid> {
        self.grid.as_ref()
    }

    /// The open plate's format
    #[must_use]
    pub fn format(&self) -> Option<PlateFormat> {
        self.grid.as_ref().map(PlateGrid::format)
    }

    /// Cursor position (always on a well while a plate is open)
    #[must_use]
    pub const fn cursor(&self) -> GridPosition {
        self.cursor
    }

    /// Label of the well under the cursor
    #[must_use]
    pub fn cursor_label(&self) -> Option<&str> {
        self.grid
            .as_ref()
            .and_then(|grid| grid.label(self.cursor.row, self.cursor.col))
    }

    /// The open sample form
    #[must_use]
    pub const fn form(&self) -> Option<&SampleForm> {
        self.form.as_ref()
    }

    /// The open sample form, for editing
    pub fn form_mut(&mut self) -> Option<&mut SampleForm> {
        self.form.as_mut()
    }

    /// Highlighted start-up choice
    #[must_use]
    pub const fn startup_selected(&self) -> StartupAction {
        StartupAction::ALL[self.startup_selected]
    }

    /// Open menu, if any
    #[must_use]
    pub const fn menu(&self) -> Option<MenuState> {
        self.menu
    }

    /// Status line text
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Samples handed to the model this session
    #[must_use]
    pub const fn samples_saved(&self) -> usize {
        self.samples_saved
    }

    /// The model
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Returns whether the manager should exit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests exit
    pub fn quit(&mut self) {
        info!("plate manager exit requested");
        self.should_quit = true;
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        debug!(status = %self.status, "status");
    }

    // ===== Start-up screen =====

    /// Moves the start-up highlight down, wrapping around
    pub fn startup_next(&mut self) {
        self.startup_selected = (self.startup_selected + 1) % StartupAction::ALL.len();
    }

    /// Moves the start-up highlight up, wrapping around
    pub fn startup_prev(&mut self) {
        let len = StartupAction::ALL.len();
        self.startup_selected = (self.startup_selected + len - 1) % len;
    }

    /// Runs the highlighted start-up choice
    pub fn startup_activate(&mut self) {
        self.choose(self.startup_selected());
    }

    /// Runs a start-up choice
    pub fn choose(&mut self, action: StartupAction) {
        if let Some(index) = StartupAction::ALL.iter().position(|&a| a == action) {
            self.startup_selected = index;
        }
        match action {
            StartupAction::NewPlate96 => self.open_plate(PlateFormat::Wells96),
            StartupAction::NewPlate384 => self.open_plate(PlateFormat::Wells384),
            StartupAction::LoadLayout => self.load_layout(),
        }
    }

    /// Opens an empty plate, closing any form or menu
    pub fn open_plate(&mut self, format: PlateFormat) {
        info!(%format, "plate opened");
        self.grid = Some(PlateGrid::new(format));
        self.cursor = GridPosition::new(1, 1);
        self.form = None;
        self.menu = None;
        self.set_status(format.title());
    }

    /// Asks the model for a stored layout. With nothing stored the current
    /// screen stays as it is.
    pub fn load_layout(&mut self) {
        match self.model.load_layout() {
            Ok(Some(format)) => self.open_plate(format),
            Ok(None) => self.set_status("Nothing to load"),
            Err(err) => {
                warn!(error = %err, "layout load failed");
                self.set_status(format!("Error: {err}"));
            }
        }
    }

    /// Hands the open layout to the model. The status only reports a save
    /// when the model stored something.
    pub fn save_layout(&mut self) {
        let Some(format) = self.format() else {
            self.set_status("No plate to save");
            return;
        };
        match self.model.save_layout(format) {
            Ok(true) => self.set_status(format!("Layout saved ({format})")),
            Ok(false) => self.set_status(format!("Layout not stored ({format}): no storage")),
            Err(err) => {
                warn!(error = %err, "layout save failed");
                self.set_status(format!("Error: {err}"));
            }
        }
    }

    /// Returns to the start-up screen
    pub fn new_plate(&mut self) {
        self.grid = None;
        self.form = None;
        self.menu = None;
        self.set_status("Choose a plate format");
    }

    // ===== Plate screen =====

    /// Moves the cursor, clamped to the wells
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let Some(format) = self.format() else {
            return;
        };
        let step = |value: usize, delta: isize, max: usize| {
            value.saturating_add_signed(delta).clamp(1, max)
        };
        self.cursor = GridPosition::new(
            step(self.cursor.row, d_row, format.rows()),
            step(self.cursor.col, d_col, format.cols()),
        );
    }

    /// Places the cursor on a well; header positions are ignored
    pub fn set_cursor(&mut self, position: GridPosition) -> bool {
        let clickable = self
            .grid
            .as_ref()
            .and_then(|grid| grid.cell_at(position.row, position.col))
            .is_some_and(|cell| cell.is_clickable());
        if clickable {
            self.cursor = position;
        }
        clickable
    }

    /// Opens the sample form for a well. Returns false for headers and
    /// positions off the plate.
    pub fn activate_well(&mut self, position: GridPosition) -> bool {
        if !self.set_cursor(position) {
            return false;
        }
        let Some(label) = self.cursor_label().map(ToString::to_string) else {
            return false;
        };
        info!(well = %label, "sample form opened");
        self.set_status(format!("Editing {label}"));
        self.form = Some(SampleForm::new(label));
        self.menu = None;
        true
    }

    /// Opens the sample form for the well under the cursor
    pub fn activate_cursor(&mut self) -> bool {
        self.activate_well(self.cursor)
    }

    /// Opens the sample form for a well given by label
    pub fn activate_label(&mut self, label: &str) -> PlateResult<()> {
        let Some(format) = self.format() else {
            self.set_status("No plate open");
            return Ok(());
        };
        let position = parse_well(label, format)?;
        self.activate_well(position);
        Ok(())
    }

    // ===== Sample form =====

    /// Validates the form and hands the record to the model. On a
    /// validation or model error the form stays open showing the message
    /// and the status line reports it.
    pub fn save_form(&mut self) -> PlateResult<()> {
        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };
        let saved = form
            .submit()
            .and_then(|record| self.model.save_sample(&record).map(|()| record));
        let record = match saved {
            Ok(record) => record,
            Err(err) => {
                if matches!(err, PlateError::Model(_)) {
                    warn!(error = %err, "sample save failed");
                    form.set_error(err.to_string());
                } else {
                    debug!(error = %err, "sample rejected");
                }
                self.set_status(format!("Error: {err}"));
                return Err(err);
            }
        };
        self.samples_saved += 1;
        self.form = None;
        info!(well = %record.well, sample_type = %record.sample_type, "sample saved");
        self.set_status(format!("Saved sample for {}", record.well));
        Ok(())
    }

    /// Closes the form without saving
    pub fn cancel_form(&mut self) {
        if let Some(form) = self.form.take() {
            self.set_status(format!("Cancelled {}", form.well()));
        }
    }

    // ===== Menus =====

    /// Opens a menu by index
    pub fn open_menu(&mut self, menu: usize) {
        if self.screen() == Screen::Plate && menu < MENUS.len() {
            self.menu = Some(MenuState { menu, item: 0 });
        }
    }

    /// Closes the open menu
    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Switches to the neighbouring menu, wrapping around
    pub fn menu_step(&mut self, forward: bool) {
        if let Some(state) = self.menu.as_mut() {
            let len = MENUS.len();
            state.menu = if forward {
                (state.menu + 1) % len
            } else {
                (state.menu + len - 1) % len
            };
            state.item = 0;
        }
    }

    /// Moves the highlight within the open menu, wrapping around
    pub fn menu_item_step(&mut self, forward: bool) {
        if let Some(state) = self.menu.as_mut() {
            let len = MENUS[state.menu].items.len();
            state.item = if forward {
                (state.item + 1) % len
            } else {
                (state.item + len - 1) % len
            };
        }
    }

    /// Runs the highlighted entry of the open menu
    pub fn menu_activate(&mut self) {
        if let Some(state) = self.menu.take() {
            if let Some(&item) = MENUS[state.menu].items.get(state.item) {
                self.run_menu_item(item);
            }
        }
    }

    /// Runs a menu entry
    pub fn run_menu_item(&mut self, item: MenuItem) {
        debug!(item = item.label(), "menu item");
        self.menu = None;
        match item {
            MenuItem::New => self.new_plate(),
            MenuItem::Open => self.load_layout(),
            MenuItem::Save => self.save_layout(),
            MenuItem::Exit => self.quit(),
            MenuItem::Find | MenuItem::Replace => {
                self.set_status(format!("{} is not available", item.label()));
            }
            MenuItem::Help => self.set_status(HELP_TEXT),
            MenuItem::About => self.set_status(format!(
                "Benchtop well plate manager {}",
                env!("CARGO_PKG_VERSION")
            )),
        }
    }
}
