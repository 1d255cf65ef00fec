use meshup_grid::{GridError, Point2, PointGrid};

/// Compute the scaled cell-wise difference between two grids.
///
/// Each output cell is `((a.x - b.x) * scale, (a.y - b.y) * scale)`. The
/// scale amplifies the (typically small) disagreement between two
/// reconstructions into a visible range; the output is a diagnostic
/// signal, not a metric with defined units.
///
/// # Arguments
///
/// * `grid_a` - The first input grid.
/// * `grid_b` - The second input grid, of the same shape.
/// * `scale` - Amplification applied to every component difference.
///
/// # Returns
///
/// The difference grid, shaped like the inputs.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if the grids differ in shape.
///
/// # Example
///
/// ```
/// use meshup_grid::{GridSize, Point2, PointGrid};
/// use meshup_resample::difference;
///
/// let size = GridSize {
///     width: 2,
///     height: 2,
/// };
/// let a = PointGrid::from_size_val(size, Point2::new(1.0, 3.0)).unwrap();
/// let b = PointGrid::from_size_val(size, Point2::new(1.0, 2.0)).unwrap();
///
/// let diff = difference(&a, &b, 500.0).unwrap();
///
/// assert_eq!(diff.get(0, 0), Some(Point2::new(0.0, 500.0)));
/// ```
pub fn difference(
    grid_a: &PointGrid,
    grid_b: &PointGrid,
    scale: f64,
) -> Result<PointGrid, GridError> {
    if grid_a.size() != grid_b.size() {
        return Err(GridError::ShapeMismatch {
            width_a: grid_a.width(),
            height_a: grid_a.height(),
            width_b: grid_b.width(),
            height_b: grid_b.height(),
        });
    }

    let data = grid_a
        .as_slice()
        .iter()
        .zip(grid_b.as_slice().iter())
        .map(|(&a, &b)| Point2::new((a.x - b.x) * scale, (a.y - b.y) * scale))
        .collect();

    PointGrid::new(grid_a.size(), data)
}

#[cfg(test)]
mod tests {
    use super::difference;
    use meshup_grid::{GridError, GridSize, Point2, PointGrid};

    #[test]
    fn a_grid_differenced_with_itself_is_zero() -> Result<(), GridError> {
        let grid = PointGrid::from_rows(vec![
            vec![Point2::new(1.0, -2.0), Point2::new(3.5, 0.0)],
            vec![Point2::new(-7.25, 4.0), Point2::new(0.0, 9.0)],
        ])?;

        for scale in [1.0, 500.0] {
            let diff = difference(&grid, &grid, scale)?;
            diff.for_each(|point, col, row| {
                assert_eq!(point, Point2::new(0.0, 0.0), "at ({col}, {row})");
            });
        }
        Ok(())
    }

    #[test]
    fn differences_are_amplified_by_the_scale() -> Result<(), GridError> {
        let size = GridSize {
            width: 1,
            height: 2,
        };
        let a = PointGrid::new(size, vec![Point2::new(1.0, 2.0), Point2::new(0.0, 0.5)])?;
        let b = PointGrid::new(size, vec![Point2::new(0.5, 2.0), Point2::new(1.0, 0.0)])?;

        let diff = difference(&a, &b, 500.0)?;
        assert_eq!(diff.get(0, 0), Some(Point2::new(250.0, 0.0)));
        assert_eq!(diff.get(0, 1), Some(Point2::new(-500.0, 250.0)));
        Ok(())
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let a = PointGrid::from_size_val(
            GridSize {
                width: 2,
                height: 2,
            },
            Point2::default(),
        )
        .unwrap();
        let b = PointGrid::from_size_val(
            GridSize {
                width: 3,
                height: 2,
            },
            Point2::default(),
        )
        .unwrap();

        let result = difference(&a, &b, 1.0);
        assert_eq!(
            result,
            Err(GridError::ShapeMismatch {
                width_a: 2,
                height_a: 2,
                width_b: 3,
                height_b: 2
            })
        );
    }
}
