use super::coord::Coord;
use super::grid::Grid;

/// Find every cell whose text contains `query`, ignoring case.
///
/// Results are in row-major order. An empty query matches every cell.
pub fn search(grid: &Grid, query: &str) -> Vec<Coord> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();
    for (r, row) in grid.rows().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if text.to_lowercase().contains(&needle) {
                hits.push(Coord::new(r, c));
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GRID_SIZE;

    #[test]
    fn test_search_ignores_case() {
        let mut grid = Grid::new();
        grid.set(0, 3, "Hello").unwrap();
        grid.set(2, 1, "say HELLO").unwrap();
        grid.set(5, 5, "bye").unwrap();

        assert_eq!(
            search(&grid, "hello"),
            vec![Coord::new(0, 3), Coord::new(2, 1)]
        );
    }

    #[test]
    fn test_empty_query_matches_every_cell() {
        let mut grid = Grid::new();
        grid.set(1, 1, "x").unwrap();
        let hits = search(&grid, "");
        assert_eq!(hits.len(), GRID_SIZE * GRID_SIZE);
        assert_eq!(hits[0], Coord::new(0, 0));
        assert_eq!(hits[hits.len() - 1], Coord::new(25, 25));
    }

    #[test]
    fn test_no_matches() {
        let grid = Grid::new();
        assert!(search(&grid, "missing").is_empty());
    }
}
