//! Stereo output routing.
//!
//! The user picks, per stereo slot (Left, Right), which source channel feeds
//! it. `RoutingMatrix` is the slot state machine that keeps the connection
//! topology sane; it drives any [`RoutingGraph`], most usefully the summing
//! [`StereoMix`] bus that produces the final stereo pair.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::AudioBlock;

/// A fixed destination in the final stereo output.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StereoSlot {
    Left,
    Right,
}

impl StereoSlot {
    pub const ALL: [StereoSlot; 2] = [StereoSlot::Left, StereoSlot::Right];

    pub fn index(self) -> usize {
        match self {
            StereoSlot::Left => 0,
            StereoSlot::Right => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StereoSlot::Left => "Left",
            StereoSlot::Right => "Right",
        }
    }
}

/// A user selection event. `channel` is the raw requested index and may be
/// invalid (negative or past the available range); the matrix discards such
/// events without touching any state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub slot: StereoSlot,
    pub channel: i64,
}

/// Connection topology the matrix operates on: directed edges from a source
/// channel index to a stereo slot.
pub trait RoutingGraph {
    fn connect(&mut self, source: usize, slot: StereoSlot);
    fn disconnect(&mut self, source: usize, slot: StereoSlot);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Unconnected,
    ConnectedTo(usize),
}

/*
Reconnection policy
===================

Each slot is independently either unconnected (initial) or connected to
exactly one source channel. A valid selection always tears down the existing
edge before making the new one:

  1. invalid index -> ignore, no state change
  2. ConnectedTo(old) -> graph.disconnect(old, slot)
  3. graph.connect(requested, slot)
  4. state = ConnectedTo(requested)

Connect-before-disconnect would transiently leave two sources feeding the
slot, and a summing bus would audibly stack them. The initial selection has
no prior edge, so step 2 simply does not fire.
*/
pub struct RoutingMatrix {
    available: usize,
    slots: [SlotState; 2],
}

impl RoutingMatrix {
    /// A matrix over `available_channels` selectable sources, both slots
    /// initially unconnected.
    pub fn new(available_channels: usize) -> Self {
        Self {
            available: available_channels,
            slots: [SlotState::Unconnected; 2],
        }
    }

    /// Source channel currently feeding `slot`, if any.
    pub fn connected(&self, slot: StereoSlot) -> Option<usize> {
        match self.slots[slot.index()] {
            SlotState::Unconnected => None,
            SlotState::ConnectedTo(channel) => Some(channel),
        }
    }

    /// Apply a selection event to `graph`. Returns whether the event was
    /// applied; invalid indices are discarded with no state change.
    pub fn select(&mut self, graph: &mut dyn RoutingGraph, selection: Selection) -> bool {
        let Selection { slot, channel } = selection;
        if channel < 0 || channel >= self.available as i64 {
            return false;
        }
        let channel = channel as usize;

        if let SlotState::ConnectedTo(old) = self.slots[slot.index()] {
            graph.disconnect(old, slot);
        }
        graph.connect(channel, slot);
        self.slots[slot.index()] = SlotState::ConnectedTo(channel);
        true
    }
}

/// Summing stereo bus: mixes every connected source channel into each slot.
///
/// Sums rather than replaces on purpose: stacked edges are audible, which is
/// what makes the matrix's disconnect-then-connect ordering observable.
pub struct StereoMix {
    sends: [Vec<usize>; 2],
}

impl StereoMix {
    pub fn new() -> Self {
        // Matrix keeps each list at one entry; capacity avoids reallocating
        // in the audio callback if a host bypasses the matrix.
        Self {
            sends: [Vec::with_capacity(8), Vec::with_capacity(8)],
        }
    }

    /// Source channels currently feeding `slot`.
    pub fn sources(&self, slot: StereoSlot) -> &[usize] {
        &self.sends[slot.index()]
    }

    /// Sum the connected source channels of `block` into `left` and `right`.
    /// Out-of-range sources are skipped; unconnected slots come out silent.
    pub fn mix_into(&self, block: &AudioBlock, left: &mut [f32], right: &mut [f32]) {
        for (slot, out) in StereoSlot::ALL.into_iter().zip([left, right]) {
            out.fill(0.0);
            for &source in self.sources(slot) {
                let Some(channel) = block.channels.get(source) else {
                    continue;
                };
                for (o, &s) in out.iter_mut().zip(channel.iter()) {
                    *o += s;
                }
            }
        }
    }
}

impl Default for StereoMix {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingGraph for StereoMix {
    fn connect(&mut self, source: usize, slot: StereoSlot) {
        self.sends[slot.index()].push(source);
    }

    fn disconnect(&mut self, source: usize, slot: StereoSlot) {
        let sends = &mut self.sends[slot.index()];
        if let Some(pos) = sends.iter().position(|&s| s == source) {
            sends.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Op {
        Connect(usize, StereoSlot),
        Disconnect(usize, StereoSlot),
    }

    /// Records every edge operation so ordering is checkable.
    #[derive(Default)]
    struct RecordingGraph {
        ops: Vec<Op>,
    }

    impl RoutingGraph for RecordingGraph {
        fn connect(&mut self, source: usize, slot: StereoSlot) {
            self.ops.push(Op::Connect(source, slot));
        }

        fn disconnect(&mut self, source: usize, slot: StereoSlot) {
            self.ops.push(Op::Disconnect(source, slot));
        }
    }

    fn select(matrix: &mut RoutingMatrix, graph: &mut impl RoutingGraph, slot: StereoSlot, channel: i64) -> bool {
        matrix.select(graph, Selection { slot, channel })
    }

    #[test]
    fn initial_selection_connects_without_disconnecting() {
        let mut matrix = RoutingMatrix::new(4);
        let mut graph = RecordingGraph::default();

        assert!(select(&mut matrix, &mut graph, StereoSlot::Left, 2));
        assert_eq!(graph.ops, [Op::Connect(2, StereoSlot::Left)]);
        assert_eq!(matrix.connected(StereoSlot::Left), Some(2));
    }

    #[test]
    fn reselection_disconnects_the_old_edge_first() {
        let mut matrix = RoutingMatrix::new(4);
        let mut graph = RecordingGraph::default();

        select(&mut matrix, &mut graph, StereoSlot::Right, 0);
        select(&mut matrix, &mut graph, StereoSlot::Right, 3);

        assert_eq!(
            graph.ops,
            [
                Op::Connect(0, StereoSlot::Right),
                Op::Disconnect(0, StereoSlot::Right),
                Op::Connect(3, StereoSlot::Right),
            ]
        );
        assert_eq!(matrix.connected(StereoSlot::Right), Some(3));
    }

    #[test]
    fn invalid_selections_are_discarded() {
        let mut matrix = RoutingMatrix::new(4);
        let mut graph = RecordingGraph::default();
        select(&mut matrix, &mut graph, StereoSlot::Left, 1);

        assert!(!select(&mut matrix, &mut graph, StereoSlot::Left, -1));
        assert!(!select(&mut matrix, &mut graph, StereoSlot::Left, 4));

        assert_eq!(matrix.connected(StereoSlot::Left), Some(1));
        assert_eq!(graph.ops.len(), 1, "invalid events must not touch the graph");
    }

    #[test]
    fn slots_are_independent() {
        let mut matrix = RoutingMatrix::new(4);
        let mut graph = RecordingGraph::default();

        select(&mut matrix, &mut graph, StereoSlot::Left, 0);
        select(&mut matrix, &mut graph, StereoSlot::Right, 1);
        select(&mut matrix, &mut graph, StereoSlot::Left, 3);

        assert_eq!(matrix.connected(StereoSlot::Left), Some(3));
        assert_eq!(matrix.connected(StereoSlot::Right), Some(1));
    }

    #[test]
    fn mix_bus_never_stacks_under_matrix_control() {
        let mut matrix = RoutingMatrix::new(4);
        let mut mix = StereoMix::new();

        for channel in [0, 2, 1, 1, 3] {
            select(&mut matrix, &mut mix, StereoSlot::Left, channel);
            assert_eq!(
                mix.sources(StereoSlot::Left).len(),
                1,
                "exactly one edge per slot after every selection"
            );
        }
        assert_eq!(mix.sources(StereoSlot::Left), [3]);
    }

    #[test]
    fn mix_sums_connected_channels() {
        let mut mix = StereoMix::new();
        mix.connect(0, StereoSlot::Left);
        mix.connect(1, StereoSlot::Right);

        let mut block = AudioBlock::new(2, 8);
        block.channels[0].fill(0.25);
        block.channels[1].fill(-0.5);

        let mut left = vec![f32::NAN; 8];
        let mut right = vec![f32::NAN; 8];
        mix.mix_into(&block, &mut left, &mut right);

        assert!(left.iter().all(|&s| s == 0.25));
        assert!(right.iter().all(|&s| s == -0.5));
    }

    #[test]
    fn unconnected_slots_mix_to_silence() {
        let mix = StereoMix::new();
        let block = AudioBlock::new(2, 8);
        let mut left = vec![f32::NAN; 8];
        let mut right = vec![f32::NAN; 8];

        mix.mix_into(&block, &mut left, &mut right);

        assert!(left.iter().all(|&s| s == 0.0));
        assert!(right.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn stacked_edges_sum_when_the_matrix_is_bypassed() {
        // Direct graph use can stack edges; the bus sums them. This is the
        // audible failure the matrix's ordering exists to prevent.
        let mut mix = StereoMix::new();
        mix.connect(0, StereoSlot::Left);
        mix.connect(1, StereoSlot::Left);

        let mut block = AudioBlock::new(2, 4);
        block.channels[0].fill(0.25);
        block.channels[1].fill(0.5);

        let mut left = vec![0.0; 4];
        let mut right = vec![0.0; 4];
        mix.mix_into(&block, &mut left, &mut right);

        assert!(left.iter().all(|&s| (s - 0.75).abs() < 1e-7));
    }
}
