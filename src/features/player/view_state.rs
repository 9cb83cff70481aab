//! Player view state: the current session and one control per layer

use crate::audio::{LayerOutput, PlaybackBlocked};
use crate::features::session::{Backdrop, Session};

/// One layer row: its name, its slider value and the output it drives
pub struct LayerControl {
    pub name: String,
    volume: f32,
    output: Box<dyn LayerOutput>,
}

impl std::fmt::Debug for LayerControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerControl")
            .field("name", &self.name)
            .field("volume", &self.volume)
            .field("url", &self.output.url())
            .finish()
    }
}

impl LayerControl {
    pub fn new(name: String, volume: f32, mut output: Box<dyn LayerOutput>) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        output.set_volume(volume);
        Self {
            name,
            volume,
            output,
        }
    }

    /// Slider value (0.0 to 1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Readout value: `round(volume * 100)`
    pub fn percent(&self) -> u32 {
        (self.volume * 100.0).round() as u32
    }

    pub fn readout(&self) -> String {
        format!("{}%", self.percent())
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.output.set_volume(self.volume);
    }

    pub fn output(&self) -> &dyn LayerOutput {
        self.output.as_ref()
    }

    pub fn output_mut(&mut self) -> &mut dyn LayerOutput {
        self.output.as_mut()
    }
}

/// A layer that refused to start
#[derive(Debug, Clone, PartialEq)]
pub struct BlockedLayer {
    pub index: usize,
    pub name: String,
    pub reason: PlaybackBlocked,
}

/// Outcome of one "play all" batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayReport {
    pub started: usize,
    pub blocked: Vec<BlockedLayer>,
}

impl PlayReport {
    pub fn all_started(&self) -> bool {
        self.blocked.is_empty()
    }
}

/// What a transport toggle did
#[derive(Debug, Clone, PartialEq)]
pub enum Transport {
    Paused,
    Started(PlayReport),
}

/// Everything the player page shows for the current session
#[derive(Debug, Default)]
pub struct PlayerViewState {
    pub session: Option<Session>,
    pub backdrop: Option<Backdrop>,
    pub layers: Vec<LayerControl>,
    pub is_playing: bool,
}

impl PlayerViewState {
    /// Pause every layer and return it to the start
    pub fn stop_all(&mut self) {
        for layer in &mut self.layers {
            layer.output.pause();
            layer.output.rewind();
        }
    }

    /// Stop and drop every output, forget the session
    pub fn reset(&mut self) {
        self.stop_all();
        self.layers.clear();
        self.session = None;
        self.backdrop = None;
        self.is_playing = false;
    }

    pub fn pause_all(&mut self) {
        for layer in &mut self.layers {
            layer.output.pause();
        }
    }

    /// Start every layer independently; refusals are collected, not raised
    pub fn play_all(&mut self) -> PlayReport {
        let mut report = PlayReport::default();
        for (index, layer) in self.layers.iter_mut().enumerate() {
            match layer.output.play() {
                Ok(()) => report.started += 1,
                Err(reason) => report.blocked.push(BlockedLayer {
                    index,
                    name: layer.name.clone(),
                    reason,
                }),
            }
        }
        report
    }
}
