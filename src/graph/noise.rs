use crate::dsp::noise::WhiteNoise;
use crate::graph::descriptor::ProcessorDescriptor;
use crate::graph::node::{AudioBlock, BlockProcessor, Params, ProcessCtx};

/// White noise source ("white-noise"): fills every sample of every output
/// channel with an independent uniform value in [-1, 1). No parameters, no
/// audio state across blocks, no failure modes.
pub struct WhiteNoiseNode {
    rng: WhiteNoise,
}

impl WhiteNoiseNode {
    pub const NAME: &'static str = "white-noise";

    pub fn new() -> Self {
        Self {
            rng: WhiteNoise::new(),
        }
    }

    pub fn descriptor(output_channels: usize) -> ProcessorDescriptor {
        ProcessorDescriptor {
            name: Self::NAME.into(),
            num_inputs: 0,
            num_outputs: 1,
            output_channels,
            params: Vec::new(),
        }
    }
}

impl Default for WhiteNoiseNode {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockProcessor for WhiteNoiseNode {
    fn process(
        &mut self,
        _inputs: &[AudioBlock],
        output: &mut AudioBlock,
        _params: &Params,
        _ctx: &ProcessCtx,
    ) {
        for channel in &mut output.channels {
            self.rng.render(channel);
        }
    }
}
