/// An error type for grid construction and grid-to-grid operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error when a grid has zero rows or zero columns.
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,

    /// Error when the rows of a grid have unequal lengths.
    #[error("Row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// Error when flat data does not match the declared grid size.
    #[error("Data length ({actual}) does not match the grid size ({expected})")]
    InvalidLength {
        /// Expected number of points (`width * height`).
        expected: usize,
        /// Number of points provided.
        actual: usize,
    },

    /// Error when flattened x and y coordinate sequences differ in length.
    #[error("Coordinate sequences differ in length ({xs} x values, {ys} y values)")]
    FlattenLengthMismatch {
        /// Number of x coordinates.
        xs: usize,
        /// Number of y coordinates.
        ys: usize,
    },

    /// Error when a flattened coordinate list is not a perfect square.
    #[error("Cannot reshape {len} points into a square grid")]
    NotSquare {
        /// Number of points provided.
        len: usize,
    },

    /// Error when two grids that must share a shape do not.
    #[error("Grid shapes differ ({width_a}x{height_a} vs {width_b}x{height_b})")]
    ShapeMismatch {
        /// Width of the first grid.
        width_a: usize,
        /// Height of the first grid.
        height_a: usize,
        /// Width of the second grid.
        width_b: usize,
        /// Height of the second grid.
        height_b: usize,
    },

    /// Error when an upsample factor is zero, negative, or NaN.
    #[error("Upsample factor must be positive, got {0}")]
    InvalidFactor(f64),
}
