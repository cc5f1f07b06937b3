//! Audio-to-display level metering.
//!
//! Two unsynchronized scheduling domains meet here. The audio callback calls
//! [`MeterTap::push_block`] after the router, pushing raw samples into
//! per-channel SPSC rings; the display loop calls [`MeterView::poll`] once
//! per frame, drains the rings into snapshot buffers, and reads RMS levels
//! off them. Communication is one-way and lock-free; when the display side
//! lags, samples are dropped at the ring, never awaited.
//!
//! The level math itself lives in [`crate::dsp::level`].

pub use crate::dsp::level::{sample, MeterSample, METER_RANGE_DB, RMS_FLOOR};

#[cfg(feature = "rtrb")]
pub use tap::{meter_tap, MeterTap, MeterView};

#[cfg(feature = "rtrb")]
mod tap {
    use rtrb::{Consumer, Producer, RingBuffer};

    use crate::dsp::level::{self, MeterSample};
    use crate::graph::node::AudioBlock;

    /// Audio-thread half: pushes post-router samples into the rings.
    pub struct MeterTap {
        producers: Vec<Producer<f32>>,
    }

    /// Display-thread half: drains the rings into rolling snapshot windows
    /// and computes meter readings from them.
    pub struct MeterView {
        consumers: Vec<Consumer<f32>>,
        snapshots: Vec<Vec<f32>>,
        window: usize,
    }

    /// Create a tap/view pair for `channels` metered channels. `window` is
    /// the snapshot length a reading covers; `capacity` is the per-channel
    /// ring size (make it a few windows deep so a slow frame drops samples
    /// instead of starving the meter).
    pub fn meter_tap(channels: usize, window: usize, capacity: usize) -> (MeterTap, MeterView) {
        let mut producers = Vec::with_capacity(channels);
        let mut consumers = Vec::with_capacity(channels);
        for _ in 0..channels {
            let (tx, rx) = RingBuffer::new(capacity);
            producers.push(tx);
            consumers.push(rx);
        }

        let view = MeterView {
            consumers,
            snapshots: vec![vec![0.0; window]; channels],
            window,
        };
        (MeterTap { producers }, view)
    }

    impl MeterTap {
        /// Push one post-router block, channel by channel. A full ring drops
        /// the remainder of that channel's block; the audio thread never
        /// waits on the display side.
        pub fn push_block(&mut self, block: &AudioBlock) {
            for (producer, channel) in self.producers.iter_mut().zip(&block.channels) {
                for &sample in channel {
                    if producer.push(sample).is_err() {
                        break;
                    }
                }
            }
        }
    }

    impl MeterView {
        pub fn channel_count(&self) -> usize {
            self.consumers.len()
        }

        /// Drain pending samples into the snapshot windows, keeping the most
        /// recent `window` samples per channel.
        pub fn poll(&mut self) {
            for (consumer, snapshot) in self.consumers.iter_mut().zip(&mut self.snapshots) {
                while let Ok(sample) = consumer.pop() {
                    snapshot.push(sample);
                }
                if snapshot.len() > self.window {
                    let excess = snapshot.len() - self.window;
                    snapshot.drain(0..excess);
                }
            }
        }

        /// Snapshot window for one channel, or `None` for a channel the tap
        /// was not created with.
        pub fn snapshot(&self, channel: usize) -> Option<&[f32]> {
            self.snapshots.get(channel).map(Vec::as_slice)
        }

        /// Current meter reading for one channel. Unknown channels read as
        /// silence.
        pub fn sample(&self, channel: usize) -> MeterSample {
            level::sample(self.snapshot(channel).unwrap_or(&[]))
        }
    }

}
