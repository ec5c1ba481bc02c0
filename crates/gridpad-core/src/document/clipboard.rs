//! In-memory clipboard for cell text.

use super::selection::Selection;
use gridpad_engine::Result;
use gridpad_engine::engine::Grid;

/// Text copied from the selection, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clipboard {
    buffer: Vec<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &[String] {
        &self.buffer
    }

    fn snapshot(selection: &Selection, grid: &Grid) -> Result<Vec<String>> {
        selection
            .members()
            .iter()
            .map(|coord| grid.get_at(*coord).map(str::to_string))
            .collect()
    }

    /// Replace the buffer with the text of every selected cell.
    pub fn copy(&mut self, selection: &Selection, grid: &Grid) -> Result<usize> {
        self.buffer = Self::snapshot(selection, grid)?;
        Ok(self.buffer.len())
    }

    /// Copy, then blank every selected cell.
    pub fn cut(&mut self, selection: &Selection, grid: &mut Grid) -> Result<usize> {
        let copied = Self::snapshot(selection, grid)?;
        for coord in selection.members() {
            grid.set_at(*coord, "")?;
        }
        self.buffer = copied;
        Ok(self.buffer.len())
    }

    /// Write the buffer into the selection, pairing by position.
    ///
    /// Selected cells past the end of the buffer become empty. The buffer is
    /// left intact so it can be pasted again.
    pub fn paste(&self, selection: &Selection, grid: &mut Grid) -> Result<usize> {
        for (i, coord) in selection.members().iter().enumerate() {
            let text = self.buffer.get(i).cloned().unwrap_or_default();
            grid.set_at(*coord, text)?;
        }
        Ok(selection.len())
    }
}
