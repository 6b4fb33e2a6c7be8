use serde::{
    Deserialize,
    Serialize,
};

use crate::GridPathError;

/// Simple flat 2D table.
///
/// `values` is a flattened array of cells, `major_dim` is the number of
/// values in each row and `minor_dim` the number of rows.
///
/// Note on memory layout:
///
/// Values that belong to the same row are adjacent in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Table2D<T: Clone> {
    values: Vec<T>,
    major_dim: usize,
    minor_dim: usize,
}

impl<T: Clone> Table2D<T> {
    /// Creates a table of the given shape with every cell set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: T) -> Table2D<T> {
        Table2D {
            values: vec![value; nrows * ncols],
            major_dim: ncols,
            minor_dim: nrows,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.values[row * self.major_dim + col]
    }

    pub fn insert(&mut self, row: usize, col: usize, value: T) {
        let idx = row * self.major_dim + col;
        self.values[idx] = value;
    }

    pub fn get_row(&self, index: usize) -> Option<&[T]> {
        let start = index * self.major_dim;
        let end = start + self.major_dim;
        if end > self.values.len() || start >= self.values.len() {
            return None;
        }
        Some(&self.values[start..end])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks(self.major_dim)
    }

    pub fn nrows(&self) -> usize {
        self.minor_dim
    }

    pub fn ncols(&self) -> usize {
        self.major_dim
    }
}

/// Immutable rectangular grid of cell values.
///
/// Construction validates the input, so a built grid is guaranteed to be
/// non-empty, rectangular, and to contain only finite values. The grid is
/// never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    values: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Grid {
    /// Builds a grid from a sequence of rows.
    ///
    /// Fails fast before any table work happens: an input with no rows or
    /// no columns, a row whose length differs from the first row's, or a
    /// NaN/infinite cell all reject with the matching [`GridPathError`].
    pub fn new<S: AsRef<[f64]>, C: AsRef<[S]>>(rows: C) -> Result<Grid, GridPathError> {
        let rows = rows.as_ref();
        if rows.is_empty() {
            return Err(GridPathError::EmptyGrid);
        }
        let ncols = rows[0].as_ref().len();
        if ncols == 0 {
            return Err(GridPathError::EmptyGrid);
        }

        let nrows = rows.len();
        let mut values = Vec::with_capacity(nrows * ncols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(GridPathError::RaggedRow {
                    row: r,
                    expected: ncols,
                    actual: row.len(),
                });
            }
            for (c, &cell) in row.iter().enumerate() {
                // Non-finite cells poison every comparison downstream, so
                // we yell here instead.
                if !cell.is_finite() {
                    return Err(GridPathError::NonFiniteCell {
                        row: r,
                        col: c,
                        value: cell,
                    });
                }
                values.push(cell);
            }
        }

        Ok(Grid {
            values,
            nrows,
            ncols,
        })
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.ncols + col]
    }

    pub fn get_row(&self, index: usize) -> Option<&[f64]> {
        let start = index * self.ncols;
        let end = start + self.ncols;
        if end > self.values.len() || start >= self.values.len() {
            return None;
        }
        Some(&self.values[start..end])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.ncols)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

        // Check dimensions
        assert_eq!(grid.ncols(), 3);
        assert_eq!(grid.nrows(), 2);

        // Check memory layout - values in same row should be adjacent
        assert_eq!(grid.values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(grid.get(1, 2), 6.0);
        assert_eq!(grid.get_row(1), Some(vec![4.0, 5.0, 6.0].as_ref()));
        assert_eq!(grid.get_row(2), None);
    }

    #[test]
    fn test_grid_error_handling() {
        // No rows at all
        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(Grid::new(&empty), Err(GridPathError::EmptyGrid));

        // Rows but no columns
        let no_cols: Vec<Vec<f64>> = vec![vec![]];
        assert_eq!(Grid::new(&no_cols), Err(GridPathError::EmptyGrid));

        // Inconsistent row lengths
        let ragged = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert_eq!(
            Grid::new(&ragged),
            Err(GridPathError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2,
            })
        );

        // NaN and infinite cells
        let with_nan = vec![vec![1.0, f64::NAN]];
        assert!(matches!(
            Grid::new(&with_nan),
            Err(GridPathError::NonFiniteCell { row: 0, col: 1, .. })
        ));
        let with_inf = vec![vec![1.0], vec![f64::INFINITY]];
        assert!(matches!(
            Grid::new(&with_inf),
            Err(GridPathError::NonFiniteCell { row: 1, col: 0, .. })
        ));
    }

    #[test]
    fn test_table2d_filled_and_insert() {
        let mut table = Table2D::filled(2, 3, 0.0);
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.ncols(), 3);
        assert_eq!(table.values, vec![0.0; 6]);

        table.insert(0, 0, 7.0);
        assert_eq!(table.values, vec![7.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        table.insert(1, 2, 8.0);
        assert_eq!(table.values, vec![7.0, 0.0, 0.0, 0.0, 0.0, 8.0]);
        assert_eq!(*table.get(1, 2), 8.0);
    }

    #[test]
    fn test_table2d_rows() {
        let mut table = Table2D::filled(2, 2, 0i32);
        table.insert(0, 1, 1);
        table.insert(1, 0, 2);

        let rows: Vec<&[i32]> = table.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[2, 0][..]]);
        assert_eq!(table.get_row(0), Some(vec![0, 1].as_ref()));
        assert_eq!(table.get_row(2), None);
    }
}
