//! Silent backend used when no output device is available
//!
//! Layers keep their volume, pause and position state so the rest of the
//! app behaves normally, but every start request is refused.

use std::sync::Arc;
use std::time::Duration;

use super::backend::{AudioBackend, LayerOutput, LayerStatus, PlaybackBlocked};
use crate::features::session::Layer;

#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn name(&self) -> &str {
        "silent"
    }

    fn is_audible(&self) -> bool {
        false
    }

    fn open_layer(&self, layer: &Layer) -> Box<dyn LayerOutput> {
        Box::new(SilentLayer {
            url: layer.url.clone(),
            volume: layer.initial_volume.clamp(0.0, 1.0),
            status: LayerStatus::Loading,
        })
    }
}

#[derive(Debug)]
struct SilentLayer {
    url: String,
    volume: f32,
    status: LayerStatus,
}

impl LayerOutput for SilentLayer {
    fn url(&self) -> &str {
        &self.url
    }

    fn attach(&mut self, _data: Arc<[u8]>) -> anyhow::Result<()> {
        self.status = LayerStatus::Ready;
        Ok(())
    }

    fn mark_failed(&mut self, reason: String) {
        self.status = LayerStatus::Failed(reason);
    }

    fn status(&self) -> &LayerStatus {
        &self.status
    }

    fn play(&mut self) -> Result<(), PlaybackBlocked> {
        Err(PlaybackBlocked::NoOutputDevice)
    }

    fn pause(&mut self) {}

    fn rewind(&mut self) {}

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_paused(&self) -> bool {
        true
    }

    fn position(&self) -> Duration {
        Duration::ZERO
    }

    fn is_looping(&self) -> bool {
        true
    }
}
