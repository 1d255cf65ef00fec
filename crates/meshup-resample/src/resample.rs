use crate::interpolation::{sample, InterpolationMode};
use meshup_grid::{GridError, GridSize, PointGrid};

/// Number of lattice cells along one axis after upsampling.
///
/// The original cells sit `factor` target cells apart, so a dimension of
/// `dim` becomes `floor((dim - 1) * factor) + 1`.
pub fn upsampled_dimension(dim: usize, factor: f64) -> usize {
    ((dim - 1) as f64 * factor).floor() as usize + 1
}

/// Resample a grid onto an upsampled lattice.
///
/// Builds the target lattice from the upsample factor and evaluates the
/// selected kernel once per target cell, at the source coordinate
/// `(col / factor, row / factor)`. A factor of 1 reproduces the input
/// exactly for both kernels, since every source coordinate then lands on
/// an integer index.
///
/// # Arguments
///
/// * `src` - The input grid container.
/// * `factor` - The upsample factor along each axis; must be positive.
/// * `mode` - The interpolation mode to use.
///
/// # Returns
///
/// The resampled grid of the target resolution.
///
/// # Errors
///
/// Returns [`GridError::InvalidFactor`] if the factor is zero, negative,
/// or NaN.
///
/// # Example
///
/// ```
/// use meshup_grid::{Point2, PointGrid};
/// use meshup_resample::{resample, InterpolationMode};
///
/// let grid = PointGrid::from_rows(vec![
///     vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)],
///     vec![Point2::new(0.0, 10.0), Point2::new(10.0, 10.0)],
/// ])
/// .unwrap();
///
/// let fine = resample(&grid, 2.0, InterpolationMode::Linear).unwrap();
///
/// assert_eq!(fine.width(), 3);
/// assert_eq!(fine.height(), 3);
/// assert_eq!(fine.get(1, 1), Some(Point2::new(5.0, 5.0)));
/// ```
pub fn resample(
    src: &PointGrid,
    factor: f64,
    mode: InterpolationMode,
) -> Result<PointGrid, GridError> {
    if !(factor > 0.0) {
        return Err(GridError::InvalidFactor(factor));
    }

    let size = GridSize {
        width: upsampled_dimension(src.width(), factor),
        height: upsampled_dimension(src.height(), factor),
    };

    let mut data = Vec::with_capacity(size.width * size.height);
    for row in 0..size.height {
        for col in 0..size.width {
            let x = col as f64 / factor;
            let y = row as f64 / factor;
            data.push(sample(src, x, y, mode));
        }
    }

    PointGrid::new(size, data)
}

#[cfg(test)]
mod tests {
    use super::{resample, upsampled_dimension};
    use crate::interpolation::InterpolationMode;
    use meshup_grid::{GridError, Point2, PointGrid};

    fn wavy_grid(dim: usize) -> PointGrid {
        let mut rows = Vec::with_capacity(dim);
        for row in 0..dim {
            rows.push(
                (0..dim)
                    .map(|col| {
                        Point2::new(
                            (col as f64 * 0.7).sin() * 40.0,
                            (row as f64 * 0.3).cos() * 40.0,
                        )
                    })
                    .collect(),
            );
        }
        PointGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn target_dimension_arithmetic() {
        assert_eq!(upsampled_dimension(3, 2.0), 5);
        assert_eq!(upsampled_dimension(5, 1.5), 7);
        assert_eq!(upsampled_dimension(4, 1.0), 4);
        assert_eq!(upsampled_dimension(1, 3.0), 1);
    }

    #[test]
    fn factor_one_is_the_identity_for_both_kernels() -> Result<(), GridError> {
        let grid = wavy_grid(4);
        for mode in [InterpolationMode::Linear, InterpolationMode::CatmullRom] {
            let out = resample(&grid, 1.0, mode)?;
            assert_eq!(out, grid, "{mode:?}");
        }
        Ok(())
    }

    #[test]
    fn non_positive_and_nan_factors_are_rejected() {
        let grid = wavy_grid(3);
        for factor in [0.0, -1.0, f64::NAN] {
            let result = resample(&grid, factor, InterpolationMode::Linear);
            assert!(
                matches!(result, Err(GridError::InvalidFactor(_))),
                "factor {factor}"
            );
        }
    }

    #[test]
    fn upsampled_shape_matches_the_lattice_arithmetic() -> Result<(), GridError> {
        let out = resample(&wavy_grid(3), 2.0, InterpolationMode::Linear)?;
        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 5);

        let out = resample(&wavy_grid(5), 1.5, InterpolationMode::CatmullRom)?;
        assert_eq!(out.width(), 7);
        assert_eq!(out.height(), 7);
        Ok(())
    }

    #[test]
    fn doubling_a_2x2_grid_keeps_corners_and_centers_the_midpoint() -> Result<(), GridError> {
        let grid = PointGrid::from_rows(vec![
            vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)],
            vec![Point2::new(0.0, 10.0), Point2::new(10.0, 10.0)],
        ])?;

        let out = resample(&grid, 2.0, InterpolationMode::Linear)?;

        assert_eq!(out.size(), [3, 3].into());
        assert_eq!(out.get(1, 1), Some(Point2::new(5.0, 5.0)));
        assert_eq!(out.get(0, 0), grid.get(0, 0));
        assert_eq!(out.get(2, 0), grid.get(1, 0));
        assert_eq!(out.get(0, 2), grid.get(0, 1));
        assert_eq!(out.get(2, 2), grid.get(1, 1));
        Ok(())
    }

    #[test]
    fn original_cells_survive_integer_upsampling() -> Result<(), GridError> {
        let grid = wavy_grid(4);
        for mode in [InterpolationMode::Linear, InterpolationMode::CatmullRom] {
            let out = resample(&grid, 3.0, mode)?;
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    assert_eq!(
                        out.get(col * 3, row * 3),
                        grid.get(col, row),
                        "{mode:?} at ({col}, {row})"
                    );
                }
            }
        }
        Ok(())
    }
}
