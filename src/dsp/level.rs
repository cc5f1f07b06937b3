//! RMS level math for the display-side meters.
//!
//! Pure functions over a snapshot of time-domain samples: RMS, decibel
//! conversion with a silence floor, and the linear rescale that turns a
//! decibel reading into the meter's visual percentage.

/// Linear RMS floor applied before the logarithm, -100 dB.
///
/// Exact silence would otherwise produce -inf dB and a non-finite percentage
/// downstream.
pub const RMS_FLOOR: f64 = 1e-5;

/// Decibel range mapped onto the visual meter.
pub const METER_RANGE_DB: (f64, f64) = (-64.0, 0.0);

/// One meter reading, recomputed every display frame. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterSample {
    pub rms_linear: f64,
    pub level_db: f64,
    /// Nominally in [0, 100]; exceeds it below -64 dB or above 0 dB.
    /// Callers that need a hard clamp must add one.
    pub visual_percent: f64,
}

/// Root-mean-square of the buffer. Empty input reads as silence.
pub fn rms(buffer: &[f32]) -> f64 {
    if buffer.is_empty() {
        return 0.0;
    }
    let total_squared: f64 = buffer.iter().map(|&s| s as f64 * s as f64).sum();
    (total_squared / buffer.len() as f64).sqrt()
}

/// Convert linear gain to decibels, flooring at [`RMS_FLOOR`] so silence
/// yields a finite value instead of -inf.
pub fn gain_to_db(gain: f64) -> f64 {
    20.0 * gain.max(RMS_FLOOR).log10()
}

/// Linearly rescale `v` from [in_min, in_max] to [out_min, out_max].
/// Values outside the input domain extrapolate; no clamping.
pub fn rescale(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (v - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Compute a full meter reading for one snapshot buffer.
pub fn sample(buffer: &[f32]) -> MeterSample {
    let rms_linear = rms(buffer);
    let level_db = gain_to_db(rms_linear);
    let (floor_db, ceil_db) = METER_RANGE_DB;
    let visual_percent = rescale(level_db, floor_db, ceil_db, -100.0, 0.0).abs();

    MeterSample {
        rms_linear,
        level_db,
        visual_percent,
    }
}
