#![deny(missing_docs)]
//! Grid resampling engine for mesh displacement upsampling.
//!
//! Reconstructs a displacement grid at fractional coordinates with either
//! bilinear or Catmull-Rom interpolation, drives the selected kernel across
//! an upsampled evaluation lattice, and compares two reconstructions cell
//! by cell.

/// Point interpolation kernels and their shared neighborhood policy.
pub mod interpolation;

/// Lattice generation and kernel-driven grid resampling.
pub mod resample;

/// Cell-wise grid comparison.
pub mod diff;

pub use crate::diff::difference;
pub use crate::interpolation::{catmull_rom_sample, linear_sample, sample, InterpolationMode};
pub use crate::resample::{resample, upsampled_dimension};
