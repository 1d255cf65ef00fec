//! Mesh displacement grid upsampling.
//!
//! Top-level crate re-exporting the workspace members: grid containers,
//! the resampling engine, and the geometry/raster boundary services.

#[doc(inline)]
pub use meshup_grid as grid;

#[doc(inline)]
pub use meshup_io as io;

#[doc(inline)]
pub use meshup_resample as resample;
