//! Playback synchronizer: reconciles user commands against player-element
//! events without feedback oscillation.
//!
//! Three clocks have to agree: the element's own playback position, the
//! mirrored copy the UI renders from, and wherever the user last pointed
//! (a seek). The rules that keep them consistent live in
//! [`PlaybackController`], a pure state machine; [`driver`] wraps it in a
//! single-consumer update loop for async embedders.

pub mod controller;
pub mod driver;

pub use controller::{
    Command, ControlSource, Effect, PlayError, PlaybackController, PlaybackState, PlayerEvent,
};
pub use driver::{MediaPlayer, PlaybackHandle, SEEK_SETTLE};
