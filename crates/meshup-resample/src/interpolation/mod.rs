//! Point interpolation kernels for grid resampling.
//!
//! Both kernels reconstruct a [`Point2`] at real-valued coordinates in the
//! grid's own index space, applied separably per axis and independently to
//! the x and y components of the stored points.
//!
//! # Interpolation Modes
//!
//! - **Linear**: 2x2 neighborhood, convex, never overshoots its samples
//! - **CatmullRom**: 4x4 neighborhood, C1-continuous, may overshoot
//!   (characteristic cubic ringing)
//!
//! Coordinates outside the grid are clamped to the nearest edge cell
//! (edge-replication); sampling never wraps or extrapolates.

mod catmull_rom;
mod linear;
mod patch;

pub use catmull_rom::catmull_rom_sample;
pub use linear::linear_sample;

use meshup_grid::{Point2, PointGrid};

/// Interpolation mode for the resample operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Separable linear interpolation over a 2x2 neighborhood
    Linear,
    /// Separable Catmull-Rom interpolation over a 4x4 neighborhood
    CatmullRom,
}

/// Kernel for interpolating a point value
///
/// # Arguments
///
/// * `grid` - The input grid container.
/// * `x` - The x coordinate of the point to interpolate, in the grid's
///   index space.
/// * `y` - The y coordinate of the point to interpolate.
/// * `mode` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated point value.
pub fn sample(grid: &PointGrid, x: f64, y: f64, mode: InterpolationMode) -> Point2 {
    match mode {
        InterpolationMode::Linear => linear_sample(grid, x, y),
        InterpolationMode::CatmullRom => catmull_rom_sample(grid, x, y),
    }
}
