use super::patch::gather_patch;
use meshup_grid::{Point2, PointGrid};

/// Spline tension. 1/2 gives the uniform Catmull-Rom spline.
const TENSION: f64 = 0.5;

/// Catmull-Rom interpolation of four collinear control values at
/// parameter `t` in [0, 1]. The curve passes through `p2` at `t = 0` and
/// `p3` at `t = 1`.
pub(crate) fn catmull_rom(t: f64, p1: f64, p2: f64, p3: f64, p4: f64) -> f64 {
    let s = TENSION;
    let a = -s * p1 + (2.0 - s) * p2 + (s - 2.0) * p3 + s * p4;
    let b = 2.0 * s * p1 + (s - 3.0) * p2 + (3.0 - 2.0 * s) * p3 - s * p4;
    let c = -s * p1 + s * p3;
    let d = p2;
    t * t * t * a + t * t * b + t * c + d
}

/// Kernel for separable Catmull-Rom interpolation
///
/// Interpolates each of the four rows of the 4x4 neighborhood of `(x, y)`
/// along the row direction, then interpolates the four row results,
/// independently for the x and y components of the stored points. Exact at
/// integer coordinates; unlike the linear kernel the result may overshoot
/// the local value range (cubic ringing).
///
/// # Arguments
///
/// * `grid` - The input grid container.
/// * `x` - The x coordinate of the point to interpolate, in the grid's
///   index space.
/// * `y` - The y coordinate of the point to interpolate.
///
/// # Returns
///
/// The interpolated point value.
pub fn catmull_rom_sample(grid: &PointGrid, x: f64, y: f64) -> Point2 {
    let base_col = x.floor();
    let base_row = y.floor();
    let frac_x = x - base_col;
    let frac_y = y - base_row;

    let p = gather_patch::<4>(grid, base_col as isize, base_row as isize);

    let mut rows_x = [0.0; 4];
    let mut rows_y = [0.0; 4];
    for (k, patch_row) in p.iter().enumerate() {
        rows_x[k] = catmull_rom(
            frac_x,
            patch_row[0].x,
            patch_row[1].x,
            patch_row[2].x,
            patch_row[3].x,
        );
        rows_y[k] = catmull_rom(
            frac_x,
            patch_row[0].y,
            patch_row[1].y,
            patch_row[2].y,
            patch_row[3].y,
        );
    }

    Point2::new(
        catmull_rom(frac_y, rows_x[0], rows_x[1], rows_x[2], rows_x[3]),
        catmull_rom(frac_y, rows_y[0], rows_y[1], rows_y[2], rows_y[3]),
    )
}
