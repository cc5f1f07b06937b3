//! Worklet-style block processors.
//!
//! Each processor is a named unit the host graph invokes once per fixed-size
//! block: it reads input port buffers and automation parameters and writes an
//! output block. Processors declare their port arity and parameter ranges in
//! a `ProcessorDescriptor` so hosts can instantiate them by name through the
//! `ProcessorRegistry`.

/// Processor metadata and the name-to-factory registry.
pub mod descriptor;
/// Phase-continuous multi-channel sine bank ("multi-sine").
pub mod multisine;
/// White noise generator ("white-noise").
pub mod noise;
/// Core block/parameter types and the processor trait.
pub mod node;
/// Index-preserving input-to-output channel router ("passthrough").
pub mod passthrough;
