use super::clipboard::Clipboard;
use super::selection::Selection;
use super::style::StyleSheet;
use gridpad_engine::engine::{Coord, FilterView, GRID_SIZE, Grid};

/// UI-agnostic document state for the spreadsheet.
///
/// Everything a front end needs lives here as owned fields; there is no
/// module-level state.
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// The 26x26 cell text grid
    pub grid: Grid,
    /// Cells the next formatting or clipboard command applies to
    pub selection: Selection,
    /// Text from the last copy/cut
    pub clipboard: Clipboard,
    /// Per-cell formatting
    pub styles: StyleSheet,
    /// Active row filter, if any. Render-only: the grid is not changed.
    pub filter: Option<FilterView>,
    /// Query behind the current highlights
    pub search_query: String,
    /// Cells matching `search_query`, row-major
    pub highlights: Vec<Coord>,
    /// Whether the grid has changed since the last reset or export
    pub modified: bool,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of a cell, `""` for anything outside the grid.
    pub fn cell_text(&self, coord: Coord) -> &str {
        self.grid.get_at(coord).unwrap_or("")
    }

    pub fn is_highlighted(&self, coord: Coord) -> bool {
        self.highlights.binary_search(&coord).is_ok()
    }

    pub fn is_selected(&self, coord: Coord) -> bool {
        self.selection.contains(coord)
    }

    /// Grid rows currently on display: the filter's rows, or all of them.
    pub fn visible_rows(&self) -> Vec<usize> {
        match &self.filter {
            Some(view) => view.rows.clone(),
            None => (0..GRID_SIZE).collect(),
        }
    }

    /// Grid row shown at a display position.
    pub fn source_row(&self, view_row: usize) -> Option<usize> {
        match &self.filter {
            Some(view) => view.source_row(view_row),
            None => (view_row < GRID_SIZE).then_some(view_row),
        }
    }
}
