//! rodio-backed layer outputs
//!
//! Every layer gets its own `Sink` on a shared mixer, so volume and
//! pause state stay per-layer while all layers mix into one device stream.
//! Sinks are created paused and empty; decoded audio is appended once the
//! layer's download completes.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use rodio::cpal::traits::{DeviceTrait, HostTrait};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, mixer::Mixer};

use super::backend::{AudioBackend, LayerOutput, LayerStatus, PlaybackBlocked};
use crate::features::session::Layer;

/// Output stream plus the mixer every layer sink connects to
pub struct RodioBackend {
    _stream: OutputStream,
    mixer: Mixer,
    device_name: Option<String>,
}

impl RodioBackend {
    /// Open the default output device
    pub fn open_default() -> Result<Self> {
        Self::open(None)
    }

    /// Open a named output device, or the default one for `None`
    pub fn open(device_name: Option<&str>) -> Result<Self> {
        let mut stream = match device_name {
            Some(name) => Self::create_stream_for_device(name)?,
            None => OutputStreamBuilder::open_default_stream()
                .map_err(|e| anyhow!("Failed to create audio output: {}", e))?,
        };
        stream.log_on_drop(false);
        let mixer = stream.mixer().clone();

        Ok(Self {
            _stream: stream,
            mixer,
            device_name: device_name.map(|s| s.to_string()),
        })
    }

    /// Create output stream for a specific device by name
    fn create_stream_for_device(device_name: &str) -> Result<OutputStream> {
        let host = rodio::cpal::default_host();

        let device = host
            .output_devices()
            .context("Failed to enumerate devices")?
            .find(|d| d.name().map(|n| n == device_name).unwrap_or(false))
            .ok_or_else(|| anyhow!("Device not found: {}", device_name))?;

        let config = device
            .default_output_config()
            .context("Failed to get device config")?;

        OutputStreamBuilder::from_device(device)
            .map_err(|e| anyhow!("Failed to create stream builder: {}", e))?
            .with_sample_rate(config.sample_rate().0)
            .open_stream()
            .map_err(|e| anyhow!("Failed to open stream: {}", e))
    }
}

impl AudioBackend for RodioBackend {
    fn name(&self) -> &str {
        self.device_name.as_deref().unwrap_or("default output")
    }

    fn is_audible(&self) -> bool {
        true
    }

    fn open_layer(&self, layer: &Layer) -> Box<dyn LayerOutput> {
        let sink = Sink::connect_new(&self.mixer);
        sink.pause();
        sink.set_volume(layer.initial_volume);

        Box::new(RodioLayer {
            url: layer.url.clone(),
            sink,
            status: LayerStatus::Loading,
        })
    }
}

/// One layer's sink. Dropping it stops the layer.
pub struct RodioLayer {
    url: String,
    sink: Sink,
    status: LayerStatus,
}

impl LayerOutput for RodioLayer {
    fn url(&self) -> &str {
        &self.url
    }

    fn attach(&mut self, data: Arc<[u8]>) -> Result<()> {
        // Looped decoding seeks back to the start instead of buffering the
        // whole decoded track in memory.
        let source = match Decoder::new_looped(Cursor::new(data)) {
            Ok(source) => source,
            Err(e) => {
                self.status = LayerStatus::Failed(e.to_string());
                return Err(anyhow!("Failed to decode {}: {}", self.url, e));
            }
        };

        self.sink.append(source);
        self.status = LayerStatus::Ready;
        tracing::debug!("Layer audio ready: {}", self.url);
        Ok(())
    }

    fn mark_failed(&mut self, reason: String) {
        self.status = LayerStatus::Failed(reason);
    }

    fn status(&self) -> &LayerStatus {
        &self.status
    }

    fn play(&mut self) -> Result<(), PlaybackBlocked> {
        if let LayerStatus::Failed(reason) = &self.status {
            return Err(PlaybackBlocked::LoadFailed(reason.clone()));
        }
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn rewind(&mut self) {
        if self.sink.empty() || self.sink.get_pos().is_zero() {
            return;
        }
        if let Err(e) = self.sink.try_seek(Duration::ZERO) {
            tracing::warn!("Failed to rewind {}: {}", self.url, e);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    fn volume(&self) -> f32 {
        self.sink.volume()
    }

    fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn is_looping(&self) -> bool {
        true
    }
}
