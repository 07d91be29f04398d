//! Plate errors

use thiserror::Error;

/// Result type for plate operations
pub type PlateResult<T> = Result<T, PlateError>;

/// Errors from well addressing, sample entry and the model seam
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlateError {
    /// Label is not a letter followed by a column number
    #[error("Malformed well label: '{0}'")]
    MalformedLabel(String),

    /// Row letter beyond the plate's last row
    #[error("Unknown row letter '{letter}' (plate has rows A-{last})")]
    UnknownRow {
        /// The offending letter
        letter: char,
        /// Last valid row letter
        last: char,
    },

    /// Column number outside `1..=cols`
    #[error("Column {column} out of range (plate has columns 1-{max})")]
    ColumnOutOfRange {
        /// The offending column
        column: usize,
        /// Last valid column
        max: usize,
    },

    /// Well count that is neither 96 nor 384
    #[error("Unsupported plate format: {0} (expected 96 or 384)")]
    UnsupportedFormat(String),

    /// A numeric form field holds something other than a non-negative number
    #[error("{field} must be a non-negative number, got '{value}'")]
    InvalidNumber {
        /// Field label
        field: &'static str,
        /// Text as typed
        value: String,
    },

    /// The model rejected a request
    #[error("Model error: {0}")]
    Model(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PlateError::UnknownRow {
                letter: 'Z',
                last: 'H'
            }
            .to_string(),
            "Unknown row letter 'Z' (plate has rows A-H)"
        );
        assert_eq!(
            PlateError::ColumnOutOfRange { column: 13, max: 12 }.to_string(),
            "Column 13 out of range (plate has columns 1-12)"
        );
        assert_eq!(
            PlateError::InvalidNumber {
                field: "Volume (uL)",
                value: "abc".into()
            }
            .to_string(),
            "Volume (uL) must be a non-negative number, got 'abc'"
        );
    }
}
