use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use meshup_grid::{Point2, PointGrid};
use meshup_resample::{resample, InterpolationMode};

fn displacement_grid(dim: usize) -> PointGrid {
    let mut rows = Vec::with_capacity(dim);
    for row in 0..dim {
        rows.push(
            (0..dim)
                .map(|col| {
                    Point2::new(
                        (col as f64 * 0.21).sin() * 120.0,
                        (row as f64 * 0.17).cos() * 120.0,
                    )
                })
                .collect(),
        );
    }
    PointGrid::from_rows(rows).unwrap()
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for dim in [16, 32, 64].iter() {
        let grid = displacement_grid(*dim);
        let parameter_string = format!("{dim}x{dim}");

        group.bench_with_input(
            BenchmarkId::new("linear", &parameter_string),
            &grid,
            |b, grid| {
                b.iter(|| resample(black_box(grid), black_box(4.0), InterpolationMode::Linear))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("catmull_rom", &parameter_string),
            &grid,
            |b, grid| {
                b.iter(|| resample(black_box(grid), black_box(4.0), InterpolationMode::CatmullRom))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resample);
criterion_main!(benches);
