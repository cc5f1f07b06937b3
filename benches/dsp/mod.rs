//! Benchmarks for low-level DSP primitives.

mod level;
mod multisine;
mod noise;

pub use level::bench_level;
pub use multisine::bench_multisine;
pub use noise::bench_noise;
