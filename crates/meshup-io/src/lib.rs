#![deny(missing_docs)]
//! Boundary services for displacement grid upsampling.
//!
//! Reads and writes the geometry XML document carrying flattened
//! coordinate lists, and renders grids to RGBA PNG files for visual
//! inspection. The core grid and resampling crates know nothing about
//! either format.

/// Geometry XML reading and writing.
pub mod geometry;

/// PNG rendering of displacement grids.
pub mod render;

/// Error types for the io module.
pub mod error;

pub use crate::error::IoError;
pub use crate::geometry::{read_geometry, write_geometry};
pub use crate::render::{write_grid_png, DEFAULT_SCALE_DIVISOR};
