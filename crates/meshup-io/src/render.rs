use std::fs::File;
use std::path::Path;

use meshup_grid::{GridSize, PointGrid};
use png::{BitDepth, ColorType, Encoder};

use crate::error::IoError;

/// Divisor mapping displacement magnitudes into visual range.
///
/// Displacements of +-250 span the full channel range around the mid-gray
/// produced by a zero displacement.
pub const DEFAULT_SCALE_DIVISOR: f64 = 500.0;

/// Render a displacement grid to an RGBA8 PNG file, one pixel per cell.
///
/// The x and y displacement of each cell become the red and green
/// channels via `clamp(v / scale_divisor + 0.5, 0, 1)`; blue is zero and
/// alpha opaque.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image to create.
/// * `grid` - The displacement grid to render.
/// * `scale_divisor` - Displacement normalization divisor, conventionally
///   [`DEFAULT_SCALE_DIVISOR`].
///
/// # Errors
///
/// Fails if the file cannot be created or the image cannot be encoded.
pub fn write_grid_png(
    file_path: impl AsRef<Path>,
    grid: &PointGrid,
    scale_divisor: f64,
) -> Result<(), IoError> {
    let buf: Vec<u8> = grid
        .to_normalized_channels(scale_divisor)
        .iter()
        .map(|&channel| (channel * 255.0).round() as u8)
        .collect();

    write_png_impl(file_path, &buf, grid.size())
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    grid_size: GridSize,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, grid_size.width as u32, grid_size.height as u32);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_grid_png, DEFAULT_SCALE_DIVISOR};
    use meshup_grid::{Point2, PointGrid};

    #[test]
    fn written_png_has_the_grid_shape_and_pixels() -> Result<(), Box<dyn std::error::Error>> {
        let grid = PointGrid::from_rows(vec![
            vec![Point2::new(0.0, 0.0), Point2::new(250.0, 0.0)],
            vec![Point2::new(-250.0, 0.0), Point2::new(0.0, 250.0)],
        ])?;

        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("grid.png");
        write_grid_png(&file_path, &grid, DEFAULT_SCALE_DIVISOR)?;

        let decoder = png::Decoder::new(std::fs::File::open(&file_path)?);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;

        assert_eq!(info.width, 2);
        assert_eq!(info.height, 2);
        // Zero displacement renders mid-gray in red/green, opaque alpha.
        assert_eq!(&buf[0..4], &[128, 128, 0, 255]);
        // Full positive x displacement saturates the red channel.
        assert_eq!(&buf[4..8], &[255, 128, 0, 255]);
        // Full negative x displacement empties it.
        assert_eq!(&buf[8..12], &[0, 128, 0, 255]);
        Ok(())
    }
}
