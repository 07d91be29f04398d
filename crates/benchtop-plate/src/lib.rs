//! Benchtop well plate manager
//!
//! Addressing for 96- and 384-well plates, sample entry for individual wells
//! and a controller that ties them to a pluggable [`PlateModel`].
//!
//! # Example
//!
//! ```rust
//! use benchtop_plate::prelude::*;
//!
//! let grid = PlateGrid::new(PlateFormat::Wells96);
//! assert_eq!(grid.position("H12"), Some(GridPosition::new(8, 12)));
//! assert!(!grid.is_clickable("A"));
//!
//! let mut controller = PlateController::default();
//! controller.choose(StartupAction::NewPlate384);
//! assert_eq!(controller.window_title(), "WellPlate: 384-Well Plate");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod controller;
pub mod error;
pub mod grid;
pub mod model;
pub mod sample;

#[cfg(feature = "tui")]
pub mod tui;

pub use controller::PlateController;
pub use error::{PlateError, PlateResult};
pub use model::{NullModel, PlateModel};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::{
        Menu, MenuItem, MenuState, PlateController, Screen, StartupAction, MENUS,
    };
    pub use crate::error::{PlateError, PlateResult};
    pub use crate::grid::{
        parse_well, row_index, row_letter, CellKind, GridCell, GridPosition, PlateFormat,
        PlateGrid,
    };
    pub use crate::model::{NullModel, PlateModel};
    pub use crate::sample::{FormField, SampleForm, SampleRecord, SampleType};

    #[cfg(feature = "tui")]
    pub use crate::tui::PlateApp;
}
