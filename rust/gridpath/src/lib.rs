//! Maximum-profit pathfinding over a rectangular grid.
//!
//! Fills a profit table and a parallel path table by dynamic programming,
//! visiting cells in row-major order and moving only right or down from the
//! origin. Each cell ends up with the best cumulative profit reaching it and
//! the route taken to get there.
//!
//! [`solve`] runs the fill on a validated [`Grid`]; [`solve_rows`] is the
//! convenience entry point that validates raw rows first.

pub mod grid;
pub mod plotting;
mod solver;

pub use grid::{
    Grid,
    Table2D,
};
pub use solver::{
    Solution,
    solve,
};
use tracing::warn;

/// Custom error types for the gridpath library.
#[derive(Debug, Clone, PartialEq)]
pub enum GridPathError {
    /// Returned when the input has no rows or the first row has no columns.
    EmptyGrid,
    /// Returned when a row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Returned when a cell value is NaN or infinite.
    NonFiniteCell {
        row: usize,
        col: usize,
        value: f64,
    },
}

/// A (row, col) cell address within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Validates `rows` and computes the profit and path tables.
///
/// This is a convenience wrapper over [`Grid::new`] followed by [`solve`].
/// Use it when the input comes straight from deserialized data; construct
/// the [`Grid`] yourself if you want to reuse it across calls.
///
/// # Example
/// ```
/// use gridpath::solve_rows;
///
/// let solution = solve_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(*solution.profit.get(1, 1), 8.0);
/// ```
pub fn solve_rows<S, C>(rows: C) -> Result<Solution, GridPathError>
where
    S: AsRef<[f64]>,
    C: AsRef<[S]>,
{
    match Grid::new(rows) {
        Ok(grid) => Ok(solve(&grid)),
        Err(e) => {
            warn!("Grid rejected before solving: {:?}", e);
            Err(e)
        }
    }
}
