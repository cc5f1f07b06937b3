pub mod dsp;
pub mod graph; // Worklet-style block processors
pub mod meter; // Audio-to-display RMS metering
pub mod routing; // Stereo output routing matrix

pub const MAX_BLOCK_SIZE: usize = 2048;
