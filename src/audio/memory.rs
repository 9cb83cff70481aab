//! In-memory backend that records what the controller does to each layer

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::backend::{AudioBackend, LayerOutput, LayerStatus, PlaybackBlocked};
use crate::features::session::Layer;

/// Shared bookkeeping visible to the test after the backend is moved
#[derive(Debug, Default)]
pub struct MemoryLog {
    /// Layers currently alive (opened and not yet dropped)
    pub live: usize,
    /// Every URL ever opened, in order
    pub opened: Vec<String>,
    /// URLs whose `play` is refused
    pub blocked: HashSet<String>,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    pub log: Rc<RefCell<MemoryLog>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse playback for layers bound to `url`
    pub fn block(&self, url: &str) {
        self.log.borrow_mut().blocked.insert(url.to_string());
    }

    pub fn live(&self) -> usize {
        self.log.borrow().live
    }
}

impl AudioBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn is_audible(&self) -> bool {
        true
    }

    fn open_layer(&self, layer: &Layer) -> Box<dyn LayerOutput> {
        let mut log = self.log.borrow_mut();
        log.live += 1;
        log.opened.push(layer.url.clone());

        Box::new(MemoryLayer {
            url: layer.url.clone(),
            volume: layer.initial_volume,
            paused: true,
            position: Duration::ZERO,
            status: LayerStatus::Loading,
            log: self.log.clone(),
        })
    }
}

struct MemoryLayer {
    url: String,
    volume: f32,
    paused: bool,
    position: Duration,
    status: LayerStatus,
    log: Rc<RefCell<MemoryLog>>,
}

impl Drop for MemoryLayer {
    fn drop(&mut self) {
        self.log.borrow_mut().live -= 1;
    }
}

impl LayerOutput for MemoryLayer {
    fn url(&self) -> &str {
        &self.url
    }

    fn attach(&mut self, data: Arc<[u8]>) -> anyhow::Result<()> {
        if data.is_empty() {
            self.status = LayerStatus::Failed("empty audio".to_string());
            anyhow::bail!("empty audio for {}", self.url);
        }
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
        if self.log.borrow().blocked.contains(&self.url) {
            return Err(PlaybackBlocked::LoadFailed("blocked by test".to_string()));
        }
        if let LayerStatus::Failed(reason) = &self.status {
            return Err(PlaybackBlocked::LoadFailed(reason.clone()));
        }
        self.paused = false;
        // Simulated progress so rewinds are observable
        self.position += Duration::from_secs(1);
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn rewind(&mut self) {
        self.position = Duration::ZERO;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn is_looping(&self) -> bool {
        true
    }
}
