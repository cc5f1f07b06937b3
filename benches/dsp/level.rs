//! Benchmarks for RMS meter readings.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebus::dsp::level;

use crate::BLOCK_SIZES;

pub fn bench_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/level");

    for &size in BLOCK_SIZES {
        let buffer: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32 * std::f32::consts::TAU).sin())
            .collect();

        group.bench_with_input(BenchmarkId::new("sample", size), &size, |b, _| {
            b.iter(|| level::sample(black_box(&buffer)))
        });
    }

    group.finish();
}
