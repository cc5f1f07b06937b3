//! Benchmarks for full processing-graph scenarios.

mod pipeline;

pub use pipeline::bench_pipeline;
