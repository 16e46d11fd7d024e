//! Benchmarks for pixtone filters.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use pixtone_core::RgbaImage;
use pixtone_lut::CurveTable;
use pixtone_ops::{Adjustments, Filter};

const SIZES: [(u32, u32); 3] = [(256, 256), (1024, 768), (1920, 1080)];

fn test_image(width: u32, height: u32) -> RgbaImage {
    let data = (0..width * height * 4).map(|i| (i * 7 % 251) as u8).collect();
    RgbaImage::from_data(width, height, data).unwrap()
}

/// Runs `filter` once per iteration on a fresh copy of each test image.
fn bench_filter(c: &mut Criterion, group_name: &str, filter: Filter) {
    let mut group = c.benchmark_group(group_name);

    for (w, h) in SIZES {
        let img = test_image(w, h);
        group.throughput(Throughput::Elements((w * h) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(format!("{w}x{h}")), &img, |b, img| {
            b.iter_batched_ref(
                || img.clone(),
                |work| filter.apply(&mut black_box(work).view_mut()),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Benchmark brightness and contrast.
fn bench_point(c: &mut Criterion) {
    bench_filter(c, "brightness", Filter::Brightness(25.0));
    bench_filter(c, "contrast", Filter::Contrast(40.0));
}

/// Benchmark HSV round-trip filters.
fn bench_hsv(c: &mut Criterion) {
    bench_filter(c, "saturation", Filter::Saturation(-30.0));
    bench_filter(c, "hue", Filter::Hue(90.0));
    bench_filter(c, "hsl_saturation", Filter::HslSaturation(20.0));
    bench_filter(c, "lightness", Filter::Lightness(-15.0));
}

/// Benchmark curve lookup.
fn bench_curves(c: &mut Criterion) {
    let table = CurveTable::from_control_points(&[[0.0, 10.0], [128.0, 150.0], [255.0, 245.0]])
        .map(|t| t.as_slice().to_vec())
        .unwrap_or_default();
    bench_filter(c, "curves", Filter::Curves(table));
}

/// Benchmark blur across radii; cost should stay flat as the radius grows.
fn bench_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur_radius");
    let img = test_image(1024, 768);
    group.throughput(Throughput::Elements(1024 * 768));

    for radius in [1.0f32, 4.0, 16.0, 64.0] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter_batched_ref(
                || img.clone(),
                |work| Filter::Blur(radius).apply(&mut black_box(work).view_mut()),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Benchmark 3x3 sharpen.
fn bench_sharpen(c: &mut Criterion) {
    bench_filter(c, "sharpen", Filter::Sharpen(60.0));
}

/// Benchmark a full editor stack.
fn bench_stack(c: &mut Criterion) {
    let adj = Adjustments {
        brightness: 10.0,
        contrast: 15.0,
        saturation: 20.0,
        blur: 2.0,
        hue: 30.0,
        lightness: 5.0,
        ..Default::default()
    };

    let mut group = c.benchmark_group("stack");
    let img = test_image(1024, 768);
    group.throughput(Throughput::Elements(1024 * 768));
    group.bench_function("1024x768", |b| {
        b.iter_batched_ref(
            || img.clone(),
            |work| adj.apply(&mut black_box(work).view_mut()),
            criterion::BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_point,
    bench_hsv,
    bench_curves,
    bench_blur,
    bench_sharpen,
    bench_stack,
);

criterion_main!(benches);
