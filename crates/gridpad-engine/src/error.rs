//! Error types for the grid model.

use thiserror::Error;

/// Errors raised by grid access and the column operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({row}, {col}) is outside the grid")]
    OutOfRange { row: usize, col: usize },

    #[error("Invalid column index: {0}. Please enter a number between 0 and 25.")]
    InvalidColumn(String),

    #[error("Text collation unavailable: {0}")]
    Collation(String),

    #[error("Grid shape mismatch: got {rows} rows (widths {cols:?})")]
    ShapeMismatch { rows: usize, cols: Vec<usize> },
}

pub type Result<T> = std::result::Result<T, GridError>;
