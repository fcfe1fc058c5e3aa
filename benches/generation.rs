//! Throughput for full growth runs and palette pops

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use pixelbloom::algorithm::config::{
    ColorPolicy, GrowthConfig, LocationPolicy, PreferencePolicy,
};
use pixelbloom::algorithm::driver::GrowthDriver;
use pixelbloom::color::{Color, Palette};
use std::hint::black_box;

fn bench_config(size: usize) -> GrowthConfig {
    GrowthConfig {
        width: size,
        height: size,
        seed: 12_345,
        location: LocationPolicy::Random,
        color: ColorPolicy::Nearest,
        preference: PreferencePolicy::Location,
        perlin_octaves: 4,
        perlin_grid_size: 32.0,
        preferred_location_iterations: 10,
        epsilon: 0.0,
    }
}

/// Measures a complete run at growing image sizes
fn bench_full_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_generation");

    for size in &[16_usize, 32, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let Ok(mut driver) = GrowthDriver::new(bench_config(size)) else {
                    return;
                };
                driver.iterate_until_done();
                black_box(driver.filled_count());
            });
        });
    }

    group.finish();
}

/// Measures closest-color pops against a mid-sized palette
fn bench_palette_pop_closest(c: &mut Criterion) {
    c.bench_function("palette_pop_closest", |b| {
        b.iter_batched(
            || Palette::uniform(4096),
            |mut palette| {
                for k in 0..1024_usize {
                    let target = Color::new(
                        (k % 256) as f64,
                        ((k * 7) % 256) as f64,
                        ((k * 13) % 256) as f64,
                    );
                    black_box(palette.pop_closest(&target, 0.0));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_full_generation, bench_palette_pop_closest);
criterion_main!(benches);
