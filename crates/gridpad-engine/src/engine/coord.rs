//! Cell coordinate parsing and formatting.
//!
//! Rows are labelled with a single letter (row 0 is `A`, row 25 is `Z`) and
//! columns with their own index, so the textual form of a coordinate is the
//! row letter followed by the column number.
//!
//! # Examples
//!
//! ```
//! use gridpad_engine::engine::Coord;
//!
//! let coord = Coord::parse("C12").unwrap();
//! assert_eq!(coord.row, 2);
//! assert_eq!(coord.col, 12);
//! assert_eq!(coord.to_string(), "C12");
//! ```

use super::grid::GRID_SIZE;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A (row, col) position in the grid, both 0-indexed.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

fn coord_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<row>[A-Za-z])(?<col>[0-9]{1,2})$").expect("coordinate regex is valid")
    })
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// True if both indices fall inside the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Parse a coordinate in `<row letter><col number>` form (e.g. "A0", "z25").
    /// Returns None if the input is malformed or outside the grid.
    pub fn parse(name: &str) -> Option<Coord> {
        let caps = coord_regex().captures(name.trim())?;
        let letter = caps["row"].bytes().next()?.to_ascii_uppercase();
        let row = (letter - b'A') as usize;
        let col = caps["col"].parse::<usize>().ok()?;
        let coord = Coord::new(row, col);
        coord.in_bounds().then_some(coord)
    }

    /// Letter label for a row index (0 -> A, 25 -> Z).
    pub fn row_label(row: usize) -> String {
        if row < GRID_SIZE {
            ((b'A' + row as u8) as char).to_string()
        } else {
            format!("?{}", row)
        }
    }
}

impl std::str::FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Coord::row_label(self.row), self.col)
    }
}
