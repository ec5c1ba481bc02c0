//! Multi-cell selection.

use gridpad_engine::GridError;
use gridpad_engine::engine::Coord;

/// The set of selected cells, kept in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    members: Vec<Coord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on `coord`.
    ///
    /// A plain click clears the selection before the membership check, so it
    /// always leaves exactly `coord` selected. A modified (Ctrl/Cmd) click
    /// toggles `coord` and leaves the other members alone.
    pub fn handle_click(&mut self, coord: Coord, modified: bool) -> Result<(), GridError> {
        if !coord.in_bounds() {
            return Err(GridError::OutOfRange {
                row: coord.row,
                col: coord.col,
            });
        }
        if !modified {
            self.members.clear();
        }
        if let Some(pos) = self.members.iter().position(|c| *c == coord) {
            self.members.remove(pos);
        } else {
            self.members.push(coord);
        }
        Ok(())
    }

    pub fn members(&self) -> &[Coord] {
        &self.members
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
