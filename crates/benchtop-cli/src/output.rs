//! Output formatting for one-shot commands

use benchtop_calc::core::ERROR_MSG;
use benchtop_plate::grid::{GridPosition, PlateGrid};
use console::{style, Term};

/// Writes command results to stdout
#[derive(Debug)]
pub struct Printer {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Prints a calculator display value; the error sentinel in red.
    ///
    /// Results are printed in quiet mode too, they are the command's output.
    pub fn display_value(&self, text: &str) -> std::io::Result<()> {
        let line = if !self.use_color {
            text.to_string()
        } else if text == ERROR_MSG {
            style(text).red().bold().to_string()
        } else {
            style(text).green().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Prints a well label with its position
    pub fn well(&self, label: &str, position: GridPosition) -> std::io::Result<()> {
        self.term.write_line(&self.well_line(label, position))
    }

    /// Prints preformatted text
    pub fn text(&self, text: &str) -> std::io::Result<()> {
        self.term.write_line(text)
    }

    /// Prints a dimmed note unless quiet
    pub fn note(&self, text: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.use_color {
            style(text).dim().to_string()
        } else {
            text.to_string()
        };
        self.term.write_line(&line)
    }

    fn well_line(&self, label: &str, position: GridPosition) -> String {
        if self.use_color {
            format!("{} {position}", style(label).cyan().bold())
        } else {
            format!("{label} {position}")
        }
    }
}

/// Renders a grid as a plain text table, one row per line
#[must_use]
pub fn grid_table(grid: &PlateGrid) -> String {
    let (rows, cols) = grid.dimensions();
    let width = grid
        .cells()
        .map(|cell| cell.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in 0..rows {
        let line: Vec<String> = (0..cols)
            .map(|col| format!("{:>width$}", grid.label(row, col).unwrap_or_default()))
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}
