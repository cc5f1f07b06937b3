//! Low-level DSP primitives used by the block processors.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! run inside the audio callback. They intentionally stay focused on the
//! per-sample math so the graph layer can handle block orchestration and
//! parameter plumbing.

/// Converting raw sample windows into display-ready levels.
pub mod level;
/// Phase-continuous sine generation under per-sample frequency automation.
pub mod multisine;
/// Uniform white noise source.
pub mod noise;
