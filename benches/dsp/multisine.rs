//! Benchmarks for phase-continuous sine generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebus::dsp::multisine::PhaseContinuousSine;

use crate::BLOCK_SIZES;

pub fn bench_multisine(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/multisine");
    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Constant frequency - correction term stays fixed
        let mut osc = PhaseContinuousSine::new(440.0);
        group.bench_with_input(BenchmarkId::new("constant", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), 440.0, 0.0, sample_rate);
            })
        });

        // Per-sample frequency jumps - correction recomputed every tick
        let mut osc = PhaseContinuousSine::new(110.0);
        let freqs: Vec<f64> = (0..size).map(|i| 110.0 + (i % 8) as f64 * 96.25).collect();
        group.bench_with_input(BenchmarkId::new("per_sample", size), &size, |b, _| {
            b.iter(|| {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let t = i as f64 / sample_rate;
                    *sample = osc.tick(black_box(freqs[i]), t);
                }
            })
        });
    }

    group.finish();
}
