#![forbid(unsafe_code)]

//! Recoverable layout errors.
//!
//! Broken internal invariants (an empty span, `min > max`) panic at the point
//! they are constructed. Only configuration a caller can reasonably get wrong
//! is reported through [`Error`].

use std::fmt;

/// Errors produced while assembling or exporting a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two table cells claim the same grid slot through their row or column spans.
    OverlappingSpans {
        /// Zero-based row of the contested slot, counted from the top of its section.
        row: usize,
        /// Zero-based column of the contested slot.
        column: usize,
    },
    /// A CSV field holds a delimiter, quote or line terminator that can only
    /// be written with an escape character, and none is configured.
    CsvEscapeRequired { row: usize, column: usize },
    /// A table cell holds a widget with no plain-text form.
    CsvUnsupportedCell { row: usize, column: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverlappingSpans { row, column } => {
                write!(
                    f,
                    "invalid table: cell spans cannot overlap (row {row}, column {column})"
                )
            }
            Self::CsvEscapeRequired { row, column } => write!(
                f,
                "content requires escaping, but no escape character is set (row {row}, column {column})"
            ),
            Self::CsvUnsupportedCell { row, column } => write!(
                f,
                "only text cells can be exported as CSV (row {row}, column {column})"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Standard result type for layout construction.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_spans_message_names_the_slot() {
        let err = Error::OverlappingSpans { row: 2, column: 1 };
        assert_eq!(
            err.to_string(),
            "invalid table: cell spans cannot overlap (row 2, column 1)"
        );
    }

    #[test]
    fn csv_messages_name_the_cell() {
        let err = Error::CsvEscapeRequired { row: 0, column: 3 };
        assert!(err.to_string().ends_with("(row 0, column 3)"));
        let err = Error::CsvUnsupportedCell { row: 1, column: 0 };
        assert_eq!(
            err.to_string(),
            "only text cells can be exported as CSV (row 1, column 0)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&Error::OverlappingSpans { row: 0, column: 0 });
    }
}
