use crate::graph::descriptor::ProcessorDescriptor;
use crate::graph::node::{AudioBlock, BlockProcessor, Params, ProcessCtx};

/*
Channel Router ("passthrough")
==============================

Maps input ports to output channels by index: input port 0 feeds output
channel 0, port 1 feeds channel 1, and so on. Only the first channel of each
input port is read.

Topology mismatches are tolerated, never errors:
- fewer input ports than output channels: the extra outputs are left
  untouched (the host zeroes the block upstream, so they stay silent);
- an input port with no channels or an empty first channel: same treatment;
- an input shorter or longer than the block: lengths truncate to the shorter.

Leaving absent channels unmodified rather than zeroing them is deliberate:
the router's contract is "copy what exists", and silencing is the block
owner's job.
*/
pub struct PassthroughNode;

impl PassthroughNode {
    pub const NAME: &'static str = "passthrough";

    pub fn new() -> Self {
        Self
    }

    /// Registration-time descriptor: one input port per output channel, one
    /// output port, no parameters.
    pub fn descriptor(output_channels: usize) -> ProcessorDescriptor {
        ProcessorDescriptor {
            name: Self::NAME.into(),
            num_inputs: output_channels,
            num_outputs: 1,
            output_channels,
            params: Vec::new(),
        }
    }
}

impl Default for PassthroughNode {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockProcessor for PassthroughNode {
    fn process(
        &mut self,
        inputs: &[AudioBlock],
        output: &mut AudioBlock,
        _params: &Params,
        _ctx: &ProcessCtx,
    ) {
        for (c, out_channel) in output.channels.iter_mut().enumerate() {
            let Some(input) = inputs.get(c) else {
                continue;
            };
            let Some(in_channel) = input.channels.first() else {
                continue;
            };
            if in_channel.is_empty() {
                continue;
            }

            let frames = out_channel.len().min(in_channel.len());
            out_channel[..frames].copy_from_slice(&in_channel[..frames]);
        }
    }
}
