//! Text diagrams of a pattern's traversal order

use crate::spatial::coordinates::{index_to_coord, is_on_grid};
use ndarray::Array2;

/// Marker printed for dots the pattern does not visit
pub const UNVISITED_MARKER: char = '·';

/// Step numbers laid out on the grid
///
/// Cells hold the one-based position of the dot within the pattern, or 0
/// when the dot is not visited. Off-grid indices are skipped.
pub fn step_grid(pattern: &[i64], grid_size: usize) -> Array2<usize> {
    let mut grid = Array2::zeros((grid_size, grid_size));

    for (step, &index) in pattern.iter().enumerate() {
        if !is_on_grid(index, grid_size) {
            continue;
        }
        let coord = index_to_coord(index, grid_size);
        if let Some(cell) = grid.get_mut((coord.y as usize, coord.x as usize)) {
            *cell = step + 1;
        }
    }

    grid
}

/// Render the grid as right-aligned step numbers, one row per line
///
/// ```text
///  1 2 3
///  · · 4
///  · · 5
/// ```
pub fn render_pattern(pattern: &[i64], grid_size: usize) -> String {
    let grid = step_grid(pattern, grid_size);
    let width = grid.iter().max().copied().unwrap_or(0).max(1).to_string().len() + 1;

    let mut lines = Vec::with_capacity(grid_size);
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|&step| {
                if step == 0 {
                    format!("{UNVISITED_MARKER:>width$}")
                } else {
                    format!("{step:>width$}")
                }
            })
            .collect();
        lines.push(line);
    }

    lines.join("\n")
}
