//! Demo host: cpal stream setup and the realtime render loop.
//!
//! The audio callback is the hard-real-time domain: it renders the sine bank
//! through the router, taps the result for the meters, applies any pending
//! routing selections at block boundaries, and mixes the selected channels to
//! the stereo device. Everything crossing to or from the UI goes through
//! rtrb rings; nothing in the callback blocks or allocates.

use std::f64::consts::TAU;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ratatui::DefaultTerminal;
use rtrb::RingBuffer;

use tonebus::{
    graph::{
        descriptor::ProcessorRegistry,
        multisine::{MultiSineNode, FREQ_PARAM_COUNT},
        node::{AudioBlock, BlockProcessor, ParamBuffer, Params, ProcessCtx},
        passthrough::PassthroughNode,
    },
    meter::meter_tap,
    routing::{RoutingMatrix, Selection, StereoMix, StereoSlot},
    MAX_BLOCK_SIZE,
};

use super::ui::{state::RouteState, UiApp};

/// Number of generated (and selectable) source channels.
pub const CHANNELS: usize = 4;

/// Snapshot window the meters read, per channel.
const VIS_WINDOW: usize = 2048;

/// Sweep rate for the demo's a-rate automation on `freq_4`, in Hz.
const SWEEP_RATE_HZ: f64 = 0.1;

/// Per-sample frequency for the swept channel: 110..880 Hz, centered between
/// the declared parameter bounds.
fn sweep_frequency(t: f64) -> f32 {
    (495.0 + 385.0 * (TAU * SWEEP_RATE_HZ * t).sin()) as f32
}

/// Resize every channel of a pre-allocated block to this block's frame
/// count. Capacity was reserved at `MAX_BLOCK_SIZE`, so this never
/// reallocates in the callback.
fn set_frames(block: &mut AudioBlock, frames: usize) {
    for channel in &mut block.channels {
        channel.resize(frames, 0.0);
    }
}

pub fn run(mut terminal: DefaultTerminal) -> EyreResult<()> {
    // --- Set up cpal ---

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f64;
    let out_channels = config.channels() as usize;

    // --- Cross-thread rings ---

    let (mut selection_tx, mut selection_rx) = RingBuffer::<Selection>::new(64);
    let (mut state_tx, state_rx) = RingBuffer::<RouteState>::new(64);
    let (mut tap, meter_view) = meter_tap(CHANNELS, VIS_WINDOW, VIS_WINDOW * 8);

    // Initial routing: channel 0 -> Left, channel 1 -> Right. Seeded through
    // the same ring as user selections so the audio thread applies them the
    // same way.
    for (slot, channel) in [(StereoSlot::Left, 0), (StereoSlot::Right, 1)] {
        selection_tx
            .push(Selection { slot, channel })
            .map_err(|_| eyre!("selection ring full before stream start"))?;
    }

    // --- Processing units, instantiated by name from the registry ---

    let registry = ProcessorRegistry::with_builtins(CHANNELS);
    let mut bank = registry
        .create(MultiSineNode::NAME)
        .ok_or_else(|| eyre!("multi-sine is not registered"))?;
    let mut router = registry
        .create(PassthroughNode::NAME)
        .ok_or_else(|| eyre!("passthrough is not registered"))?;

    // Frequency automation: three channels hold their defaults, the fourth
    // gets a per-sample sweep written each block.
    let descriptor = registry
        .descriptor(MultiSineNode::NAME)
        .ok_or_else(|| eyre!("multi-sine has no descriptor"))?;
    let mut param_buffers: Vec<ParamBuffer> = descriptor
        .params
        .iter()
        .map(|p| ParamBuffer::Constant(p.default_value))
        .collect();
    param_buffers[FREQ_PARAM_COUNT - 1] = ParamBuffer::PerSample(vec![0.0; MAX_BLOCK_SIZE]);
    let mut params = Params::new(param_buffers);

    // --- Audio-thread state, moved into the callback ---

    let mut matrix = RoutingMatrix::new(CHANNELS);
    let mut mix = StereoMix::new();
    let mut ctx = ProcessCtx::new(sample_rate);

    let mut bank_out = AudioBlock::new(CHANNELS, MAX_BLOCK_SIZE);
    let mut router_out = AudioBlock::new(CHANNELS, MAX_BLOCK_SIZE);
    let mut ports: Vec<AudioBlock> = (0..CHANNELS)
        .map(|_| AudioBlock::new(1, MAX_BLOCK_SIZE))
        .collect();
    let mut left = vec![0.0f32; MAX_BLOCK_SIZE];
    let mut right = vec![0.0f32; MAX_BLOCK_SIZE];
    let router_params = Params::default();

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            // Routing changes land exactly on block boundaries; the graph
            // never sees a half-applied reconnection.
            let mut route_changed = false;
            while let Ok(selection) = selection_rx.pop() {
                route_changed |= matrix.select(&mut mix, selection);
            }
            if route_changed {
                let _ = state_tx.push(RouteState {
                    left: matrix.connected(StereoSlot::Left),
                    right: matrix.connected(StereoSlot::Right),
                });
            }

            let total_frames = data.len() / out_channels;
            let mut frames_done = 0;

            while frames_done < total_frames {
                let frames = (total_frames - frames_done).min(MAX_BLOCK_SIZE);

                // Write this block's slice of the frequency sweep.
                if let Some(ParamBuffer::PerSample(values)) = params.get_mut(FREQ_PARAM_COUNT - 1) {
                    for (i, value) in values[..frames].iter_mut().enumerate() {
                        let t = ctx.start_time + i as f64 / ctx.sample_rate;
                        *value = sweep_frequency(t);
                    }
                }

                set_frames(&mut bank_out, frames);
                bank.process(&[], &mut bank_out, &params, &ctx);

                // Fan the bank out: input port c of the router carries bank
                // channel c as its single channel.
                for (port, channel) in ports.iter_mut().zip(&bank_out.channels) {
                    let dst = &mut port.channels[0];
                    dst.resize(frames, 0.0);
                    dst.copy_from_slice(channel);
                }

                set_frames(&mut router_out, frames);
                router_out.fill(0.0);
                router.process(&ports, &mut router_out, &router_params, &ctx);

                // Read-only tap for the display-side meters.
                tap.push_block(&router_out);

                mix.mix_into(&router_out, &mut left[..frames], &mut right[..frames]);

                // Interleave the stereo pair; any extra device channels stay
                // silent.
                for i in 0..frames {
                    let base = (frames_done + i) * out_channels;
                    for sample in &mut data[base..base + out_channels] {
                        *sample = 0.0;
                    }
                    data[base] = left[i];
                    if out_channels > 1 {
                        data[base + 1] = right[i];
                    }
                }

                ctx.advance(frames);
                frames_done += frames;
            }
        },
        |err| eprintln!("Audio error: {}", err),
        None,
    )?;

    stream.play()?;

    let mut app = UiApp::new(meter_view, selection_tx, state_rx, sample_rate);
    app.run(&mut terminal)
}
