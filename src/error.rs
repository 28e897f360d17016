//! Error types for the Boggle solver.

use thiserror::Error;

/// Errors reported before a search begins.
///
/// A path that matches nothing in the dictionary is never an error; it is
/// simply pruned. Only malformed input and unreadable dictionaries surface
/// here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("board of {width}x{height} does not match {cells} cells")]
    BoardSizeMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },

    #[error("board row {row} has {got} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("board text contains no cells")]
    EmptyBoard,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
