//! Benchmarks for white noise generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebus::dsp::noise::WhiteNoise;

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut noise = WhiteNoise::new();

        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, _| {
            b.iter(|| {
                noise.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
