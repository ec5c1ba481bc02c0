//! Row filtering on a single column.

use super::grid::Grid;
use super::sort::check_column;
use crate::error::Result;

/// A read-only subset of grid rows that matched a filter.
///
/// Rows keep their original order and their original index, so a renderer
/// can label them and route edits back to the underlying grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterView {
    pub col: usize,
    pub needle: String,
    /// Original row indices of the matching rows, ascending.
    pub rows: Vec<usize>,
}

impl FilterView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Original row index for a position in the view.
    pub fn source_row(&self, view_row: usize) -> Option<usize> {
        self.rows.get(view_row).copied()
    }
}

/// Select the rows whose value in `col` contains `needle` (case-sensitive).
pub fn filter(grid: &Grid, col: usize, needle: &str) -> Result<FilterView> {
    let col = check_column(col)?;
    let rows = grid
        .rows()
        .enumerate()
        .filter(|(_, row)| row[col].contains(needle))
        .map(|(r, _)| r)
        .collect();
    Ok(FilterView {
        col,
        needle: needle.to_string(),
        rows,
    })
}
