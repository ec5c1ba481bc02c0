//! Whole-row sorting keyed on one column.
//!
//! A column is compared numerically only when every one of its 26 values is
//! a number; a single blank or non-numeric cell switches the whole column to
//! case-insensitive text ordering under the root-locale collation (accented
//! letters sort next to their base letter). The sort is stable, so rows with
//! equal keys keep their relative order.

use super::grid::{GRID_SIZE, Grid, Matrix};
use super::number::{is_numeric_column, parse_number};
use crate::error::{GridError, Result};
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;

/// How a column's values are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKind {
    Numeric,
    Lexicographic,
}

/// Validate a column index for sort/filter.
pub fn check_column(col: usize) -> Result<usize> {
    if col < GRID_SIZE {
        Ok(col)
    } else {
        Err(GridError::InvalidColumn(col.to_string()))
    }
}

/// Parse user-supplied column text (e.g. from a prompt) into a valid index.
pub fn parse_column(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let col = trimmed
        .parse::<usize>()
        .map_err(|_| GridError::InvalidColumn(trimmed.to_string()))?;
    check_column(col)
}

/// Decide which comparator a column uses.
pub fn classify_column(grid: &Grid, col: usize) -> Result<SortKind> {
    let col = check_column(col)?;
    let values = grid.rows().map(|row| row[col].as_str());
    Ok(if is_numeric_column(values) {
        SortKind::Numeric
    } else {
        SortKind::Lexicographic
    })
}

/// Root-locale collator. Secondary strength: accents matter, case does not.
fn text_collator() -> Result<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(&Default::default(), options)
        .map_err(|e| GridError::Collation(e.to_string()))
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let x = parse_number(a).unwrap_or(0.0);
    let y = parse_number(b).unwrap_or(0.0);
    x.total_cmp(&y)
}

/// Compute the new row order for sorting by `col`.
///
/// Entry `i` of the result is the original index of the row that lands at
/// position `i`.
pub fn sort_permutation(grid: &Grid, col: usize) -> Result<Vec<usize>> {
    let kind = classify_column(grid, col)?;
    let mut order: Vec<usize> = (0..GRID_SIZE).collect();
    let matrix = grid.matrix();
    // `sort_by` is stable.
    match kind {
        SortKind::Numeric => {
            order.sort_by(|&a, &b| compare_numbers(&matrix[a][col], &matrix[b][col]));
        }
        SortKind::Lexicographic => {
            let collator = text_collator()?;
            let keys: Vec<String> = matrix.iter().map(|row| row[col].to_lowercase()).collect();
            order.sort_by(|&a, &b| collator.compare(&keys[a], &keys[b]));
        }
    }
    Ok(order)
}

/// Apply a row permutation to a matrix.
pub fn permute_rows(matrix: &Matrix, order: &[usize]) -> Matrix {
    order.iter().map(|&src| matrix[src].clone()).collect()
}

/// Return a copy of the grid with rows sorted ascending by `col`.
pub fn sort(grid: &Grid, col: usize) -> Result<Grid> {
    let order = sort_permutation(grid, col)?;
    let mut sorted = Grid::new();
    sorted.replace_all(permute_rows(grid.matrix(), &order))?;
    Ok(sorted)
}
