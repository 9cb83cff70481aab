//! Audio playback module
//!
//! - `backend`: the `AudioBackend` / `LayerOutput` seam the player talks to
//! - `rodio_backend`: one rodio `Sink` per layer on a shared mixer
//! - `silent`: stand-in when no output device can be opened
//! - `loader`: layer downloads with an on-disk cache

mod backend;
pub mod loader;
#[cfg(test)]
pub mod memory;
mod rodio_backend;
mod silent;

pub use backend::{AudioBackend, LayerOutput, LayerStatus, PlaybackBlocked};
use rodio_backend::RodioBackend;
use silent::SilentBackend;

/// Open the configured output device, falling back to the default device and
/// finally to the silent backend
pub fn create_backend(device_name: Option<&str>) -> Box<dyn AudioBackend> {
    if let Some(name) = device_name {
        match RodioBackend::open(Some(name)) {
            Ok(backend) => {
                tracing::info!("Audio output opened on device: {}", name);
                return Box::new(backend);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to use configured device '{}': {:#}, falling back to default",
                    name,
                    e
                );
            }
        }
    }

    match RodioBackend::open_default() {
        Ok(backend) => {
            tracing::info!("Audio output opened on default device");
            Box::new(backend)
        }
        Err(e) => {
            tracing::error!("Failed to open audio output: {:#}, running silent", e);
            Box::new(SilentBackend)
        }
    }
}
