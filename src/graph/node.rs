/// Context passed to block processors during rendering.
///
/// Contains the host clock view for the current block:
/// - start_time: absolute time of the block's first sample, in seconds.
///   Continuous across blocks; the host supplies a seamless running clock.
/// - sample_rate: fixed audio sample rate (e.g. 48000.0).
pub struct ProcessCtx {
    pub start_time: f64,
    pub sample_rate: f64,
}

impl ProcessCtx {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            start_time: 0.0,
            sample_rate,
        }
    }

    /// Advance the clock past `frames` rendered samples.
    pub fn advance(&mut self, frames: usize) {
        self.start_time += frames as f64 / self.sample_rate;
    }
}

/// One block of audio: an ordered set of equally sized channel buffers.
///
/// Owned by the host loop and reused every block. Sources overwrite it fully;
/// the router overwrites only channels with a live input, so the host zeroes
/// it upstream when that matters.
#[derive(Debug, Default, Clone)]
pub struct AudioBlock {
    pub channels: Vec<Vec<f32>>,
}

impl AudioBlock {
    /// A zero-initialized block of `channels` × `frames` samples.
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            channels: vec![vec![0.0; frames]; channels],
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn fill(&mut self, value: f32) {
        for channel in &mut self.channels {
            channel.fill(value);
        }
    }
}

/// Automation values for one parameter over one block.
///
/// Either a single scalar that holds for the whole block, or one value per
/// sample (a-rate automation).
#[derive(Debug, Clone)]
pub enum ParamBuffer {
    Constant(f32),
    PerSample(Vec<f32>),
}

impl ParamBuffer {
    /// Value at sample index `i`. A per-sample buffer shorter than the block
    /// holds its last value; an empty one reads as zero.
    #[inline]
    pub fn value_at(&self, i: usize) -> f32 {
        match self {
            ParamBuffer::Constant(v) => *v,
            ParamBuffer::PerSample(values) => match values.get(i) {
                Some(v) => *v,
                None => values.last().copied().unwrap_or(0.0),
            },
        }
    }
}

/// Per-block parameter set, ordered to match the processor's declared
/// parameter descriptors.
#[derive(Debug, Default, Clone)]
pub struct Params {
    buffers: Vec<ParamBuffer>,
}

impl Params {
    pub fn new(buffers: Vec<ParamBuffer>) -> Self {
        Self { buffers }
    }

    /// All parameters constant for the block.
    pub fn constant(values: &[f32]) -> Self {
        Self {
            buffers: values.iter().map(|&v| ParamBuffer::Constant(v)).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&ParamBuffer> {
        self.buffers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ParamBuffer> {
        self.buffers.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

/// Core trait for block processors.
///
/// `process` is invoked once per block on the audio thread. Implementations
/// must be total: any input topology and any numeric parameter value yields a
/// defined result, never an error or a panic.
pub trait BlockProcessor: Send {
    /// Render one block. `inputs` holds one block per input port; `output`
    /// is the unit's single output port.
    fn process(
        &mut self,
        inputs: &[AudioBlock],
        output: &mut AudioBlock,
        params: &Params,
        ctx: &ProcessCtx,
    );
}

/// Allow boxed processors to be used directly (for dynamic dispatch).
impl BlockProcessor for Box<dyn BlockProcessor> {
    fn process(
        &mut self,
        inputs: &[AudioBlock],
        output: &mut AudioBlock,
        params: &Params,
        ctx: &ProcessCtx,
    ) {
        (**self).process(inputs, output, params, ctx)
    }
}
