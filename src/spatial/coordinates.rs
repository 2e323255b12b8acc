//! Conversion between row-major grid indices and planar coordinates
//!
//! Indices are signed so that malformed host input can flow through the
//! geometry without faulting. Conversion uses a truncating remainder for `x`
//! and floor division for `y`, so negative indices map to negative coordinates.

/// Planar position of a dot, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column, increasing to the right
    pub x: i64,
    /// Row, increasing downwards
    pub y: i64,
}

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Displacement from `self` to `other`
    ///
    /// Widened to `i128` so that any two `i64` coordinates have an exact
    /// difference.
    pub const fn direction_to(self, other: Self) -> (i128, i128) {
        (
            other.x as i128 - self.x as i128,
            other.y as i128 - self.y as i128,
        )
    }
}

/// Convert a grid index into its coordinate on a `grid_size` wide grid
///
/// A zero `grid_size`, or one too wide for `i64`, maps every index to the origin.
pub const fn index_to_coord(index: i64, grid_size: usize) -> Coordinate {
    let size = grid_size as i64;
    if size <= 0 {
        return Coordinate::new(0, 0);
    }
    Coordinate::new(index % size, index.div_euclid(size))
}

/// Convert a coordinate back into a row-major grid index
pub const fn coord_to_index(coord: Coordinate, grid_size: usize) -> i64 {
    coord.y.saturating_mul(grid_size as i64).saturating_add(coord.x)
}

/// Indices of the four corner dots, in the order top-left, top-right,
/// bottom-left, bottom-right
///
/// On a 1×1 grid all four entries are `0`.
pub const fn corner_indices(grid_size: usize) -> [i64; 4] {
    let size = grid_size as i64;
    [
        0,
        size.saturating_sub(1),
        size.saturating_mul(size.saturating_sub(1)),
        max_index(grid_size),
    ]
}

/// Largest index that names a dot on the grid (`-1` for an empty grid)
pub const fn max_index(grid_size: usize) -> i64 {
    let size = grid_size as i64;
    size.saturating_mul(size).saturating_sub(1)
}

/// Number of dots on the grid
pub const fn dot_count(grid_size: usize) -> usize {
    grid_size.saturating_mul(grid_size)
}

/// Check whether an index names a dot on the grid
pub const fn is_on_grid(index: i64, grid_size: usize) -> bool {
    index >= 0 && index <= max_index(grid_size)
}
