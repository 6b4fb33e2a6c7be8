use tracing::info;

use crate::Coord;
use crate::grid::{
    Grid,
    Table2D,
};

/// Profit and path tables produced by one solver pass.
///
/// Both tables share the grid's shape and are rebuilt from scratch on every
/// [`solve`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Maximum cumulative profit reaching each cell.
    pub profit: Table2D<f64>,
    /// For each cell, the route from the origin up to and including that
    /// cell's chosen predecessor. The cell itself is excluded.
    pub path: Table2D<Vec<Coord>>,
}

impl Solution {
    /// Profit accumulated at the bottom-right cell.
    pub fn terminal_profit(&self) -> f64 {
        *self.profit.get(self.profit.nrows() - 1, self.profit.ncols() - 1)
    }

    /// Route recorded for the bottom-right cell.
    pub fn terminal_path(&self) -> &[Coord] {
        self.path.get(self.path.nrows() - 1, self.path.ncols() - 1)
    }
}

/// Fills the profit and path tables for `grid` in one row-major pass.
///
/// Interior cells take the better of the up/left profits plus their own
/// value, ties going to the left neighbor. Cells on the first row and first
/// column accumulate from a single direction, keeping the immediate
/// predecessor pair-sum rather than a running total. That boundary policy is
/// part of the contract and is pinned by the tests.
pub fn solve(grid: &Grid) -> Solution {
    let nrows = grid.nrows();
    let ncols = grid.ncols();
    let mut profit = Table2D::filled(nrows, ncols, 0.0);
    let mut path: Table2D<Vec<Coord>> = Table2D::filled(nrows, ncols, Vec::new());

    for i in 0..nrows {
        for j in 0..ncols {
            if i == 0 && j == 0 {
                profit.insert(0, 0, grid.get(0, 0));
                path.insert(0, 0, vec![Coord::new(0, 0)]);
            } else if i == 0 {
                profit.insert(0, j, grid.get(0, j - 1) + grid.get(0, j));
                let mut route = path.get(0, j - 1).clone();
                route.push(Coord::new(0, j - 1));
                path.insert(0, j, route);
            } else if j == 0 {
                profit.insert(i, 0, grid.get(i - 1, 0) + grid.get(i, 0));
                let mut route = path.get(i - 1, 0).clone();
                route.push(Coord::new(i - 1, 0));
                path.insert(i, 0, route);
            } else {
                let (best, from) = choose_max(
                    *profit.get(i - 1, j),
                    Coord::new(i - 1, j),
                    *profit.get(i, j - 1),
                    Coord::new(i, j - 1),
                );
                profit.insert(i, j, best + grid.get(i, j));
                let mut route = path.get(from.row, from.col).clone();
                route.push(from);
                path.insert(i, j, route);
            }
        }
    }

    info!(
        "Solved {}x{} grid, terminal profit: {}",
        nrows,
        ncols,
        profit.get(nrows - 1, ncols - 1)
    );

    Solution { profit, path }
}

/// Picks the better of the two candidate predecessors.
///
/// The comparison is a strict `>`, so on a tie the second (left) candidate
/// wins.
fn choose_max(a: f64, a_coord: Coord, b: f64, b_coord: Coord) -> (f64, Coord) {
    if a > b { (a, a_coord) } else { (b, b_coord) }
}
