//! Plate formats and the grid addressing table
//!
//! A plate of `R` rows and `C` columns is laid out on an `(R+1) x (C+1)`
//! grid. Row 0 holds column headers, column 0 holds row letters and `(0,0)`
//! is a blank corner:
//!
//! ```text
//!      1   2   3  ..  12
//!  A  A1  A2  A3  .. A12
//!  B  B1  B2  B3  .. B12
//!  ..
//!  H  H1  H2  H3  .. H12
//! ```
//!
//! The table is built once per format and never changes afterwards.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{PlateError, PlateResult};

/// Supported plate formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "usize")]
pub enum PlateFormat {
    /// 8 rows x 12 columns
    #[default]
    Wells96,
    /// 16 rows x 24 columns
    Wells384,
}

impl PlateFormat {
    /// All formats, smallest first
    pub const ALL: [Self; 2] = [Self::Wells96, Self::Wells384];

    /// Number of well rows
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Wells96 => 8,
            Self::Wells384 => 16,
        }
    }

    /// Number of well columns
    #[must_use]
    pub const fn cols(self) -> usize {
        match self {
            Self::Wells96 => 12,
            Self::Wells384 => 24,
        }
    }

    /// Number of wells
    #[must_use]
    pub const fn well_count(self) -> usize {
        self.rows() * self.cols()
    }

    /// Window title for a plate of this format
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Wells96 => "WellPlate: 96-Well Plate",
            Self::Wells384 => "WellPlate: 384-Well Plate",
        }
    }

    /// Looks a format up by its well count
    #[must_use]
    pub const fn from_well_count(count: usize) -> Option<Self> {
        match count {
            96 => Some(Self::Wells96),
            384 => Some(Self::Wells384),
            _ => None,
        }
    }
}

impl From<PlateFormat> for usize {
    fn from(format: PlateFormat) -> Self {
        format.well_count()
    }
}

impl fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-well", self.well_count())
    }
}

impl FromStr for PlateFormat {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("-well")
            .or_else(|| trimmed.strip_suffix("-Well"))
            .unwrap_or(trimmed);
        digits
            .parse()
            .ok()
            .and_then(Self::from_well_count)
            .ok_or_else(|| PlateError::UnsupportedFormat(s.to_string()))
    }
}

/// A `(row, col)` position on the grid, headers included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    /// Grid row (0 is the header row)
    pub row: usize,
    /// Grid column (0 is the header column)
    pub col: usize,
}

impl GridPosition {
    /// Creates a position
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a grid cell represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Blank top-left cell
    Corner,
    /// Column number in row 0
    ColumnHeader,
    /// Row letter in column 0
    RowHeader,
    /// An addressable well
    Well,
}

/// One cell of the grid table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Text shown on the cell
    pub label: String,
    /// Fixed grid position
    pub position: GridPosition,
    /// Header, corner or well
    pub kind: CellKind,
}

impl GridCell {
    /// Only wells respond to clicks
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.kind == CellKind::Well
    }
}

/// Returns the letter for well row `index` (1 is `A`)
#[must_use]
pub fn row_letter(index: usize) -> Option<char> {
    if (1..=26).contains(&index) {
        char::from_u32(u32::from(b'A') + index as u32 - 1)
    } else {
        None
    }
}

/// Returns the well row index for a letter (`A`/`a` is 1)
#[must_use]
pub fn row_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as usize) - ('A' as usize) + 1)
}

/// Strictly parses a well label such as `H12` for a given format
pub fn parse_well(label: &str, format: PlateFormat) -> PlateResult<GridPosition> {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    let malformed = || PlateError::MalformedLabel(label.to_string());

    let letter = chars.next().ok_or_else(malformed)?;
    let row = row_index(letter).ok_or_else(malformed)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }
    let col: usize = digits.parse().map_err(|_| malformed())?;

    if row > format.rows() {
        return Err(PlateError::UnknownRow {
            letter: letter.to_ascii_uppercase(),
            last: row_letter(format.rows()).unwrap_or('?'),
        });
    }
    if col == 0 || col > format.cols() {
        return Err(PlateError::ColumnOutOfRange {
            column: col,
            max: format.cols(),
        });
    }

    Ok(GridPosition::new(row, col))
}

/// Immutable label table for one plate format
#[derive(Debug, Clone)]
pub struct PlateGrid {
    format: PlateFormat,
    cells: Vec<GridCell>,
    index: HashMap<String, usize>,
}

#[derive(Serialize)]
struct GridDefinition<'a> {
    format: PlateFormat,
    title: &'static str,
    rows: usize,
    cols: usize,
    cells: &'a [GridCell],
}

impl PlateGrid {
    /// Builds the grid table for a format
    #[must_use]
    pub fn new(format: PlateFormat) -> Self {
        let (grid_rows, grid_cols) = (format.rows() + 1, format.cols() + 1);
        let mut cells = Vec::with_capacity(grid_rows * grid_cols);

        for row in 0..grid_rows {
            let letter = row_letter(row).map(String::from).unwrap_or_default();
            for col in 0..grid_cols {
                let (label, kind) = match (row, col) {
                    (0, 0) => (String::new(), CellKind::Corner),
                    (0, _) => (col.to_string(), CellKind::ColumnHeader),
                    (_, 0) => (letter.clone(), CellKind::RowHeader),
                    _ => (format!("{letter}{col}"), CellKind::Well),
                };
                cells.push(GridCell {
                    label,
                    position: GridPosition::new(row, col),
                    kind,
                });
            }
        }

        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.label.clone(), i))
            .collect();

        tracing::debug!(%format, cells = cells.len(), "grid built");
        Self {
            format,
            cells,
            index,
        }
    }

    /// The plate format
    #[must_use]
    pub const fn format(&self) -> PlateFormat {
        self.format
    }

    /// Grid dimensions including headers: `(rows + 1, cols + 1)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.format.rows() + 1, self.format.cols() + 1)
    }

    /// The cell at a grid position
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&GridCell> {
        let (rows, cols) = self.dimensions();
        if row < rows && col < cols {
            self.cells.get(row * cols + col)
        } else {
            None
        }
    }

    /// The label at a grid position
    #[must_use]
    pub fn label(&self, row: usize, col: usize) -> Option<&str> {
        self.cell_at(row, col).map(|cell| cell.label.as_str())
    }

    /// Looks a label up (case-insensitive). Foreign labels return `None`.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<GridPosition> {
        self.find(label).map(|cell| cell.position)
    }

    /// The cell carrying a label (case-insensitive)
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&GridCell> {
        let key = label.trim().to_ascii_uppercase();
        self.index.get(&key).and_then(|&i| self.cells.get(i))
    }

    /// Returns true if the label names a well of this plate
    #[must_use]
    pub fn is_clickable(&self, label: &str) -> bool {
        self.find(label).is_some_and(GridCell::is_clickable)
    }

    /// All cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// Well cells only, row-major
    pub fn wells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| cell.is_clickable())
    }

    /// Pretty JSON of the whole table
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&GridDefinition {
            format: self.format,
            title: self.format.title(),
            rows: self.format.rows(),
            cols: self.format.cols(),
            cells: &self.cells,
        })
    }
}
