//! Grid model API.
//!
//! - [`Grid`] - the fixed 26x26 text matrix
//! - [`Coord`] - cell coordinates (`A0` notation <-> row/col indices)
//! - [`sort`] / [`sort_permutation`] - stable whole-row sort on one column
//! - [`filter`] - substring row filter producing a [`FilterView`]
//! - [`search`] - case-insensitive cell search

mod coord;
mod filter;
mod grid;
mod number;
mod search;
mod sort;

pub use coord::Coord;
pub use filter::{FilterView, filter};
pub use grid::{GRID_SIZE, Grid, Matrix, empty_matrix};
pub use number::{is_numeric_column, parse_number};
pub use search::search;
pub use sort::{
    SortKind, check_column, classify_column, parse_column, permute_rows, sort, sort_permutation,
};
