use std::path::{Path, PathBuf};

use argh::FromArgs;

use meshup::grid::PointGrid;
use meshup::io::{self, DEFAULT_SCALE_DIVISOR};
use meshup::resample::{difference, resample, InterpolationMode};

const DEFAULT_UPSAMPLE_FACTOR: f64 = 2.0;

#[derive(FromArgs)]
/// Upsample a mesh displacement geometry file and render diagnostic images
struct Args {
    /// path to the input geometry file
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output geometry file
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// upsample factor (defaults to 2)
    #[argh(option, short = 'u')]
    upsample: Option<f64>,
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", path.display(), suffix))
}

fn write_diagnostic_png(path: PathBuf, grid: &PointGrid) -> Result<(), io::IoError> {
    log::info!("writing {}", path.display());
    io::write_grid_png(path, grid, DEFAULT_SCALE_DIVISOR)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let upsample_factor = args.upsample.unwrap_or_else(|| {
        log::warn!(
            "No upsampling factor specified. Defaulting to {DEFAULT_UPSAMPLE_FACTOR}. \
             Type --help for more info."
        );
        DEFAULT_UPSAMPLE_FACTOR
    });

    let original = io::read_geometry(&args.input)?;

    let linear = resample(&original, upsample_factor, InterpolationMode::Linear)?;
    let catmull_rom = resample(&original, upsample_factor, InterpolationMode::CatmullRom)?;

    // The amplified disagreement between the two reconstructions.
    let diff = difference(&catmull_rom, &linear, DEFAULT_SCALE_DIVISOR)?;

    write_diagnostic_png(with_suffix(&args.input, ".png"), &original)?;
    write_diagnostic_png(with_suffix(&args.output, ".linear.png"), &linear)?;
    write_diagnostic_png(with_suffix(&args.output, ".png"), &catmull_rom)?;
    write_diagnostic_png(with_suffix(&args.output, ".difference.png"), &diff)?;

    io::write_geometry(&args.output, &catmull_rom)?;

    Ok(())
}
