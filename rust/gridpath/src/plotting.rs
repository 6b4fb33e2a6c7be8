// ANSI color codes
const COLOR_GRAY: &str = "\x1b[90m";
const COLOR_RED: &str = "\x1b[91m";
const COLOR_RESET: &str = "\x1b[0m";

use std::collections::HashSet;

use crate::grid::Grid;
use crate::solver::Solution;

impl Solution {
    /// Displays the solved grid as a heatmap in the terminal.
    /// Uses grayscale blocks for cell-value intensity and red for the cells
    /// on the route to the bottom-right corner.
    pub fn display_heatmap(&self, grid: &Grid) {
        println!("\n{}", self.format_heatmap(grid));
    }

    /// Formats the solved grid as a string heatmap for logging or display.
    pub fn format_heatmap(&self, grid: &Grid) -> String {
        let mut output = String::new();
        let route = self.route_cells();

        // Value range for normalization. Cells are guaranteed finite, but
        // a constant grid still needs a non-zero span.
        let mut min_val = f64::INFINITY;
        let mut max_val = f64::NEG_INFINITY;
        for row in grid.rows() {
            for &v in row {
                min_val = min_val.min(v);
                max_val = max_val.max(v);
            }
        }
        let span = max_val - min_val;

        // Top border
        output.push('╔');
        output.push_str(&"═".repeat(grid.ncols()));
        output.push_str("╗\n");

        for r in 0..grid.nrows() {
            output.push('║');
            for c in 0..grid.ncols() {
                let intensity = if span > 0.0 {
                    (grid.get(r, c) - min_val) / span
                } else {
                    1.0
                };
                let block = get_block_char(intensity);

                // Color: red for route cells, gray for the rest
                let colored = if route.contains(&(r, c)) {
                    format!("{}{}{}", COLOR_RED, block, COLOR_RESET)
                } else {
                    format!("{}{}{}", COLOR_GRAY, block, COLOR_RESET)
                };

                output.push_str(&colored);
            }
            output.push_str("║\n");
        }

        // Bottom border
        output.push('╚');
        output.push_str(&"═".repeat(grid.ncols()));
        output.push_str("╝\n");

        // Legend
        output.push_str(&format!(
            "\n  Legend: {}█{} = off route, {}█{} = optimal route, Range: {:.2}-{:.2}, Terminal profit: {:.2}\n",
            COLOR_GRAY,
            COLOR_RESET,
            COLOR_RED,
            COLOR_RESET,
            min_val,
            max_val,
            self.terminal_profit()
        ));

        output
    }

    /// Cells on the recorded route to the bottom-right corner, terminal
    /// cell included.
    fn route_cells(&self) -> HashSet<(usize, usize)> {
        let last_row = self.path.nrows() - 1;
        let last_col = self.path.ncols() - 1;
        let mut cells: HashSet<(usize, usize)> = self
            .path
            .get(last_row, last_col)
            .iter()
            .map(|coord| (coord.row, coord.col))
            .collect();
        cells.insert((last_row, last_col));
        cells
    }
}

/// Maps intensity (0.0 to 1.0) to Unicode block characters
fn get_block_char(intensity: f64) -> &'static str {
    match intensity {
        i if i >= 0.875 => "█", // Full block
        i if i >= 0.750 => "▓", // Dark shade
        i if i >= 0.625 => "▒", // Medium shade
        i if i >= 0.500 => "░", // Light shade
        i if i >= 0.375 => "▒", // Medium shade
        i if i >= 0.250 => "░", // Light shade
        i if i >= 0.125 => "·", // Dot
        _ => " ",               // Empty
    }
}
