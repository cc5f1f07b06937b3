use std::f64::consts::TAU;

/*
Phase-Continuous Sine
=====================

A sine oscillator whose frequency may change on every single sample without
the waveform ever jumping in value.

The naive formulation `sin(2π·f·t)` is phase-correct only while `f` is
constant: the moment `f` changes, the old regime `sin(2π·f_old·t)` and the
new regime `sin(2π·f_new·t)` disagree about the phase at time `t`, and the
output jumps — an audible click.

This oscillator keeps a running correction term instead. Every sample, before
rendering, the correction absorbs the phase disagreement between the previous
frequency and the current one at the current absolute time:

  correction += t · (f_prev − f)
  phase       = t · f + correction

At the instant of a frequency change the two regimes now agree on phase, so
the waveform value is continuous (C0). Only the slope changes, which is heard
as a timbral shift rather than a click.

Note this is a linear patch-up, not a true integral of instantaneous
frequency: within a block the sweep shape is only as fine as the automation
that drives it. That is the intended behavior, not an approximation to be
"fixed" — smoothing or integrating the frequency would produce a different
(and differently audible) sweep.

The math is defined for any real frequency. Zero, negative, and
out-of-declared-range values are accepted as-is; no clamping happens here.
*/

/// Sine oscillator that stays value-continuous across arbitrary frequency
/// changes, including a new frequency on every sample.
///
/// State is `f64`: the phase correction accumulates products of absolute time
/// and frequency deltas, which overflows `f32` precision within seconds.
#[derive(Debug, Clone, Copy)]
pub struct PhaseContinuousSine {
    /// Accumulated phase correction in cycles.
    correction: f64,
    /// Frequency applied to the most recently rendered sample, in Hz.
    prev_freq: f64,
}

impl PhaseContinuousSine {
    /// Create an oscillator whose first sample treats `initial_freq_hz` as
    /// the previously applied frequency (so starting at that frequency needs
    /// no correction at all).
    pub fn new(initial_freq_hz: f64) -> Self {
        Self {
            correction: 0.0,
            prev_freq: initial_freq_hz,
        }
    }

    /// Frequency applied to the most recently rendered sample.
    pub fn last_frequency(&self) -> f64 {
        self.prev_freq
    }

    /// Accumulated phase correction, in cycles.
    pub fn correction(&self) -> f64 {
        self.correction
    }

    /// Render one sample at absolute `time` (seconds) with frequency
    /// `freq_hz`, updating the continuity state.
    #[inline]
    pub fn tick(&mut self, freq_hz: f64, time: f64) -> f32 {
        self.correction += time * (self.prev_freq - freq_hz);
        self.prev_freq = freq_hz;

        let phase = time * freq_hz + self.correction;
        (TAU * phase).sin() as f32
    }

    /// Render a block at a constant frequency. `start_time` is the absolute
    /// time of the first sample; the host must supply a seamless running
    /// clock across blocks.
    pub fn render(&mut self, out: &mut [f32], freq_hz: f64, start_time: f64, sample_rate: f64) {
        for (i, sample) in out.iter_mut().enumerate() {
            let t = start_time + i as f64 / sample_rate;
            *sample = self.tick(freq_hz, t);
        }
    }
}
