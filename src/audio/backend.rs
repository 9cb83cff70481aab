//! Audio backend abstraction
//!
//! A backend turns a session `Layer` into a `LayerOutput`: one looping,
//! independently-volumed playback unit. The controller only ever talks to
//! these traits, so the rodio implementation, the silent fallback and the
//! test backend are interchangeable.

use std::sync::Arc;
use std::time::Duration;

use crate::features::session::Layer;

/// Why a layer refused to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackBlocked {
    /// No audio output device could be opened
    NoOutputDevice,
    /// The layer's audio could not be downloaded or decoded
    LoadFailed(String),
}

impl std::fmt::Display for PlaybackBlocked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackBlocked::NoOutputDevice => write!(f, "no audio output device"),
            PlaybackBlocked::LoadFailed(e) => write!(f, "audio unavailable: {}", e),
        }
    }
}

impl std::error::Error for PlaybackBlocked {}

/// Load state of a layer's audio data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerStatus {
    /// Waiting for the download to finish
    Loading,
    /// Decoded and queued on the output
    Ready,
    /// Download or decode failed
    Failed(String),
}

/// Runtime control over one looping layer
pub trait LayerOutput {
    /// Source URL this output is bound to
    fn url(&self) -> &str;

    /// Hand the downloaded audio bytes to the output
    fn attach(&mut self, data: Arc<[u8]>) -> anyhow::Result<()>;

    /// Record that the audio for this layer will never arrive
    fn mark_failed(&mut self, reason: String);

    fn status(&self) -> &LayerStatus;

    /// Start (or resume) playback.
    ///
    /// A layer that is still loading accepts the request and starts as soon
    /// as its audio is attached.
    fn play(&mut self) -> Result<(), PlaybackBlocked>;

    fn pause(&mut self);

    /// Return to the start of the track
    fn rewind(&mut self);

    fn set_volume(&mut self, volume: f32);

    fn volume(&self) -> f32;

    fn is_paused(&self) -> bool;

    fn position(&self) -> Duration;

    fn is_looping(&self) -> bool;
}

/// Factory for layer outputs
pub trait AudioBackend {
    /// Human-readable backend name for logs
    fn name(&self) -> &str;

    /// Whether outputs from this backend actually produce sound
    fn is_audible(&self) -> bool;

    /// Create a paused, looping output for `layer` at its initial volume
    fn open_layer(&self, layer: &Layer) -> Box<dyn LayerOutput>;
}
