//! Benchmarks for DSP primitives and the full demo pipeline.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure the performance of core operations to ensure
//! they complete well within real-time audio deadlines.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (multisine, noise, level)
//!   - scenarios/*  Full bank -> router -> stereo mix blocks

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_multisine,
    dsp::bench_noise,
    dsp::bench_level,
    // Full pipeline
    scenarios::bench_pipeline,
);
criterion_main!(benches);
