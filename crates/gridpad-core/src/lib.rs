//! gridpad-core - UI-agnostic document model + export.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Align, CellStyle, Clipboard, Command, Document, Selection, StyleSheet};
pub use error::{GridpadError, Result};

pub use gridpad_engine::engine::{Coord, FilterView, GRID_SIZE, Grid};
