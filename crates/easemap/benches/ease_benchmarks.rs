//! Benchmark tests for eased remapping.
//!
//! Run with: cargo bench --bench ease_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use easemap::{map, map_with_exponent, Curve, Direction, EaseLut, Range};

fn bench_linear_ease(c: &mut Criterion) {
    let inputs: Vec<f32> = (0..=1000).map(|i| i as f32 / 1000.0).collect();

    c.bench_function("linear_ease", |b| {
        b.iter(|| {
            for &t in &inputs {
                std::hint::black_box(Curve::Linear.ease(Direction::In, std::hint::black_box(t)));
            }
        });
    });
}

fn bench_catalog_ease(c: &mut Criterion) {
    let inputs: Vec<f32> = (0..=1000).map(|i| i as f32 / 1000.0).collect();

    for curve in Curve::ALL {
        c.bench_function(&format!("ease_{}_in_out", curve), |b| {
            b.iter(|| {
                for &t in &inputs {
                    std::hint::black_box(curve.ease(Direction::InOut, std::hint::black_box(t)));
                }
            });
        });
    }
}

fn bench_map_quadratic(c: &mut Criterion) {
    let input = Range::new(0.0, 10.0);
    let output = Range::new(0.0, 100.0);
    let values: Vec<f32> = (0..=1000).map(|i| i as f32 / 100.0).collect();

    c.bench_function("map_quadratic_in", |b| {
        b.iter(|| {
            for &value in &values {
                std::hint::black_box(map(
                    std::hint::black_box(value),
                    input,
                    output,
                    Curve::Quadratic,
                    Direction::In,
                ));
            }
        });
    });
}

fn bench_map_with_exponent(c: &mut Criterion) {
    let input = Range::new(0.0, 10.0);
    let output = Range::new(0.0, 100.0);
    let values: Vec<f32> = (0..=1000).map(|i| i as f32 / 100.0).collect();

    c.bench_function("map_with_exponent", |b| {
        b.iter(|| {
            for &value in &values {
                std::hint::black_box(map_with_exponent(
                    std::hint::black_box(value),
                    input,
                    output,
                    2.2,
                    Direction::InOut,
                ));
            }
        });
    });
}

fn bench_lut_lookup(c: &mut Criterion) {
    let lut = EaseLut::from_curve(Curve::Exponential, Direction::InOut);
    let inputs: Vec<f32> = (0..=1000).map(|i| i as f32 / 1000.0).collect();

    c.bench_function("lut_lookup", |b| {
        b.iter(|| {
            for &t in &inputs {
                std::hint::black_box(lut.lookup(std::hint::black_box(t)));
            }
        });
    });
}

fn bench_lut_creation(c: &mut Criterion) {
    c.bench_function("lut_creation", |b| {
        b.iter(|| std::hint::black_box(Curve::Circular.to_lut(Direction::InOut)));
    });
}

fn bench_single_map(c: &mut Criterion) {
    let input = Range::new(0.0, 10.0);
    let output = Range::new(0.0, 100.0);

    c.bench_function("single_map", |b| {
        b.iter(|| {
            std::hint::black_box(map(
                std::hint::black_box(5.0),
                input,
                output,
                Curve::Sinusoidal,
                Direction::Out,
            ))
        });
    });
}

fn bench_hot_loop_1khz(c: &mut Criterion) {
    let lut = EaseLut::from_curve(Curve::Quintic, Direction::InOut);

    let mut group = c.benchmark_group("hot_loop");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("1khz_lookup_loop", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let t = (i as f32 % 256.0) / 255.0;
                std::hint::black_box(lut.lookup(std::hint::black_box(t)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_linear_ease,
    bench_catalog_ease,
    bench_map_quadratic,
    bench_map_with_exponent,
    bench_lut_lookup,
    bench_lut_creation,
    bench_single_map,
    bench_hot_loop_1khz,
);

criterion_main!(benches);
