//! Fixed-size cell storage.

use super::coord::Coord;
use crate::error::{GridError, Result};

/// Number of rows and of columns in every grid.
pub const GRID_SIZE: usize = 26;

/// A row-major matrix of cell text.
pub type Matrix = Vec<Vec<String>>;

/// A fresh all-empty matrix.
pub fn empty_matrix() -> Matrix {
    vec![vec![String::new(); GRID_SIZE]; GRID_SIZE]
}

/// The 26x26 text grid. The shape never changes; unset cells hold `""`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Matrix,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            cells: empty_matrix(),
        }
    }

    fn check(row: usize, col: usize) -> Result<()> {
        if Coord::new(row, col).in_bounds() {
            Ok(())
        } else {
            Err(GridError::OutOfRange { row, col })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&str> {
        Self::check(row, col)?;
        Ok(&self.cells[row][col])
    }

    /// Overwrite a cell. Any text is accepted, including the empty string.
    pub fn set(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<()> {
        Self::check(row, col)?;
        self.cells[row][col] = text.into();
        Ok(())
    }

    pub fn get_at(&self, coord: Coord) -> Result<&str> {
        self.get(coord.row, coord.col)
    }

    pub fn set_at(&mut self, coord: Coord, text: impl Into<String>) -> Result<()> {
        self.set(coord.row, coord.col, text)
    }

    /// Replace every cell with the empty string.
    pub fn reset(&mut self) {
        self.cells = empty_matrix();
    }

    /// Swap in a whole new matrix. The grid is left untouched unless the
    /// replacement is exactly 26x26.
    pub fn replace_all(&mut self, matrix: Matrix) -> Result<()> {
        let well_formed =
            matrix.len() == GRID_SIZE && matrix.iter().all(|row| row.len() == GRID_SIZE);
        if !well_formed {
            return Err(GridError::ShapeMismatch {
                rows: matrix.len(),
                cols: matrix.iter().map(Vec::len).collect(),
            });
        }
        self.cells = matrix;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[String]> {
        Self::check(row, 0)?;
        Ok(&self.cells[row])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(String::is_empty)
    }

    /// Smallest rectangle containing every non-empty cell, as
    /// `(min_row, min_col, max_row, max_col)`. None for an empty grid.
    pub fn bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut found: Option<(usize, usize, usize, usize)> = None;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                found = Some(match found {
                    None => (r, c, r, c),
                    Some((r1, c1, r2, c2)) => (r1.min(r), c1.min(c), r2.max(r), c2.max(c)),
                });
            }
        }
        found
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
