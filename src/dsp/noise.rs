/// Uniform white noise in [-1, 1) from an xorshift64 PRNG.
///
/// No audio state persists between samples or blocks; the generator always
/// succeeds and never allocates, so it is safe in the realtime path.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    state: u64,
}

impl WhiteNoise {
    pub fn new() -> Self {
        Self::with_seed(0x9e37_79b9_7f4a_7c15)
    }

    /// Seed must be non-zero; xorshift has a fixed point at zero.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Next sample, uniform in [-1, 1).
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        // Top 24 bits give a uniform value in [0, 1) at f32 resolution.
        let unit = (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32;
        unit * 2.0 - 1.0
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new()
    }
}
