//! Shared state types for UI communication.
//!
//! Routing changes are applied on the audio thread (at block boundaries) and
//! reported back to the UI, so what the routing pane shows is what the audio
//! graph actually does, not what the user last asked for.

/// Currently connected source channel per stereo slot. Copy and
/// allocation-free so it can travel through the audio-to-UI ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteState {
    pub left: Option<usize>,
    pub right: Option<usize>,
}
