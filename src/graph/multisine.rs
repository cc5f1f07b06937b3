use crate::dsp::multisine::PhaseContinuousSine;
use crate::graph::descriptor::{AutomationRate, ParamDescriptor, ProcessorDescriptor};
use crate::graph::node::{AudioBlock, BlockProcessor, Params, ProcessCtx};

/// Number of named frequency parameters (`freq_1` .. `freq_4`).
pub const FREQ_PARAM_COUNT: usize = 4;

/// Default frequency for parameter stream `index`: spaced at 110 Hz multiples.
pub fn default_frequency(index: usize) -> f32 {
    (index as f32 + 1.0) * 110.0
}

/*
Multi-Sine Bank ("multi-sine")
==============================

A pure source: no input ports, one output port with N channels, each channel
an independent phase-continuous sine lane. Channel `c` is driven by frequency
parameter stream `c % FREQ_PARAM_COUNT`, so a bank wider than its parameter
set wraps around the available streams.

Parameters are declared a-rate: the host may hand each one a distinct value
for every sample of the block, and the lanes stay click-free regardless (see
`dsp::multisine` for the continuity argument).

Each lane owns its own state struct; lanes never share or reset state, and a
block boundary is invisible to them as long as the host clock in `ProcessCtx`
keeps running seamlessly.
*/
pub struct MultiSineNode {
    lanes: Vec<PhaseContinuousSine>,
}

impl MultiSineNode {
    pub const NAME: &'static str = "multi-sine";

    /// A bank with one sine lane per output channel, each starting at its
    /// parameter stream's default frequency.
    pub fn new(output_channels: usize) -> Self {
        let lanes = (0..output_channels)
            .map(|c| PhaseContinuousSine::new(default_frequency(c % FREQ_PARAM_COUNT) as f64))
            .collect();
        Self { lanes }
    }

    /// Registration-time descriptor: no inputs, one N-channel output, four
    /// ranged a-rate frequency parameters.
    pub fn descriptor(output_channels: usize) -> ProcessorDescriptor {
        let params = (0..FREQ_PARAM_COUNT)
            .map(|i| ParamDescriptor {
                name: format!("freq_{}", i + 1),
                default_value: default_frequency(i),
                min_value: 0.0,
                max_value: 880.0,
                rate: AutomationRate::ARate,
            })
            .collect();

        ProcessorDescriptor {
            name: Self::NAME.into(),
            num_inputs: 0,
            num_outputs: 1,
            output_channels,
            params,
        }
    }

    /// Frequency applied to the most recent sample of `channel`.
    pub fn last_frequency(&self, channel: usize) -> Option<f64> {
        self.lanes.get(channel).map(PhaseContinuousSine::last_frequency)
    }
}

impl BlockProcessor for MultiSineNode {
    fn process(
        &mut self,
        _inputs: &[AudioBlock],
        output: &mut AudioBlock,
        params: &Params,
        ctx: &ProcessCtx,
    ) {
        for (c, lane) in self.lanes.iter_mut().enumerate() {
            let Some(samples) = output.channels.get_mut(c) else {
                break;
            };
            let param = params.get(c % FREQ_PARAM_COUNT);

            for (i, sample) in samples.iter_mut().enumerate() {
                // A missing parameter holds the lane's last frequency.
                let freq = match param {
                    Some(p) => p.value_at(i) as f64,
                    None => lane.last_frequency(),
                };
                let t = ctx.start_time + i as f64 / ctx.sample_rate;
                *sample = lane.tick(freq, t);
            }
        }
    }
}
