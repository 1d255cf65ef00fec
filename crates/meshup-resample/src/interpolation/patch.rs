use meshup_grid::{Point2, PointGrid};

/// Gather the `N x N` neighborhood around the base cell `(base_col,
/// base_row)`, clamping every fetched index to the grid bounds.
///
/// For kernel radius `r = N / 2` the patch covers offsets
/// `base - (r - 1) ..= base + r` along each axis. Each index is clamped
/// independently per offset, so a patch that straddles an edge replicates
/// the nearest edge cells rather than wrapping or extrapolating.
pub(crate) fn gather_patch<const N: usize>(
    grid: &PointGrid,
    base_col: isize,
    base_row: isize,
) -> [[Point2; N]; N] {
    let radius = (N / 2) as isize;
    let max_col = grid.width() as isize - 1;
    let max_row = grid.height() as isize - 1;
    let data = grid.as_slice();

    let mut patch = [[Point2::default(); N]; N];
    for (dy, patch_row) in patch.iter_mut().enumerate() {
        let row = (base_row + dy as isize - (radius - 1)).clamp(0, max_row) as usize;
        for (dx, cell) in patch_row.iter_mut().enumerate() {
            let col = (base_col + dx as isize - (radius - 1)).clamp(0, max_col) as usize;
            *cell = data[row * grid.width() + col];
        }
    }

    patch
}
