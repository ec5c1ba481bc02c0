//! Error types for Gridpad core.

use gridpad_engine::GridError;
use thiserror::Error;

/// Errors that can occur while applying a command to a document
#[derive(Error, Debug)]
pub enum GridpadError {
    #[error("{0}")]
    Grid(#[from] GridError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),
}

pub type Result<T> = std::result::Result<T, GridpadError>;
