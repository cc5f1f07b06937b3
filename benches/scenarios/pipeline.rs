//! Benchmark for a full demo block: sine bank through the router into the
//! routed stereo mix.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebus::graph::{
    multisine::MultiSineNode,
    node::{AudioBlock, BlockProcessor, Params, ProcessCtx},
    passthrough::PassthroughNode,
};
use tonebus::routing::{RoutingMatrix, Selection, StereoMix, StereoSlot};

use crate::BLOCK_SIZES;

pub fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pipeline");
    let channels = 4;

    for &size in BLOCK_SIZES {
        let mut bank = MultiSineNode::new(channels);
        let mut router = PassthroughNode::new();
        let params = Params::constant(&[110.0, 220.0, 330.0, 440.0]);
        let router_params = Params::default();
        let mut ctx = ProcessCtx::new(48_000.0);

        let mut bank_out = AudioBlock::new(channels, size);
        let mut ports: Vec<AudioBlock> = (0..channels).map(|_| AudioBlock::new(1, size)).collect();
        let mut router_out = AudioBlock::new(channels, size);
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        let mut matrix = RoutingMatrix::new(channels);
        let mut mix = StereoMix::new();
        matrix.select(
            &mut mix,
            Selection {
                slot: StereoSlot::Left,
                channel: 0,
            },
        );
        matrix.select(
            &mut mix,
            Selection {
                slot: StereoSlot::Right,
                channel: 1,
            },
        );

        group.bench_with_input(BenchmarkId::new("block", size), &size, |b, _| {
            b.iter(|| {
                bank.process(&[], black_box(&mut bank_out), &params, &ctx);
                for (port, channel) in ports.iter_mut().zip(&bank_out.channels) {
                    port.channels[0].copy_from_slice(channel);
                }
                router.process(&ports, black_box(&mut router_out), &router_params, &ctx);
                mix.mix_into(&router_out, &mut left, &mut right);
                ctx.advance(size);
            })
        });
    }

    group.finish();
}
