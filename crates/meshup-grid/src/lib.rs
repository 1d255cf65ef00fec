#![deny(missing_docs)]
//! Grid types for mesh displacement upsampling.
//!
//! A [`PointGrid`] is a rectangular, row-major container of 2-component
//! displacement points, fixed in shape at construction. Grids are never
//! mutated in place; every transformation produces a new grid.

/// Rectangular point grid container.
pub mod grid;

/// 2-component displacement point.
pub mod point;

/// Error types for the grid module.
pub mod error;

pub use crate::error::GridError;
pub use crate::grid::{GridSize, PointGrid};
pub use crate::point::Point2;
