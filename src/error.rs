use crate::modules::node::Coordinate;
use thiserror::Error;

/// Rejected input. An unreachable goal is not an error, see [`crate::PathFinder`].
#[derive(Debug, Error)]
pub enum PathError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("plane holds {found} cells, expected {expected}")]
    PlaneSize { expected: usize, found: usize },

    #[error("a {rows}x{columns} grid does not fit in memory")]
    TooLarge { rows: usize, columns: usize },

    #[error("invalid cell value {value} at ({row}, {column}), expected 0 or 1")]
    InvalidCell { row: usize, column: usize, value: u8 },

    #[error("line {line}: invalid cell token {token:?}")]
    Parse { line: usize, token: String },

    #[error("coordinate {coordinate:?} is outside the {rows}x{columns} grid")]
    OutOfBounds {
        coordinate: Coordinate,
        rows: usize,
        columns: usize,
    },

    #[error("malformed path: {0}")]
    MalformedPath(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
