//! Session player controller
//!
//! Owns the page navigation, the current session and one layer output per
//! session layer. All mutation happens from the UI update loop; the only
//! asynchronous work (the session request and the layer downloads) comes
//! back tagged so results that no longer apply can be dropped:
//!
//! - every `request_session` takes a new request generation, and only the
//!   newest request's completion is applied;
//! - every `setup_player` takes a new session epoch, and layer audio for an
//!   older epoch is discarded.

mod pages;
mod view_state;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::api::SessionFetchError;
use crate::audio::AudioBackend;
use crate::features::session::{Backdrop, Session};
use crate::features::settings::FailurePolicy;
use crate::i18n::Key;

pub use pages::{ACTIVATION_DELAY, Page, PageTransition, PageView};
pub use view_state::{BlockedLayer, LayerControl, PlayReport, PlayerViewState, Transport};

/// An issued session request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTicket {
    generation: u64,
    pub theme: String,
}

/// A layer whose audio still has to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerLoad {
    epoch: u64,
    pub index: usize,
    pub url: String,
}

/// Where the presented session came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Remote,
    Fallback,
}

/// Result of applying a session request's completion
#[derive(Debug)]
pub enum RequestOutcome {
    /// A session is on the player page
    Presented {
        source: SessionSource,
        transition: PageTransition,
        loads: Vec<LayerLoad>,
    },
    /// The endpoint failed and the policy says to tell the user and stop
    Aborted(SessionFetchError),
    /// The endpoint answered with something that is not a session
    Rejected(SessionFetchError),
    /// A newer request superseded this one
    Stale,
}

pub struct SessionPlayer {
    backend: Box<dyn AudioBackend>,
    pages: PageView,
    view: PlayerViewState,
    loading: bool,
    request_generation: u64,
    session_epoch: u64,
}

impl SessionPlayer {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            pages: PageView::default(),
            view: PlayerViewState::default(),
            loading: false,
            request_generation: 0,
            session_epoch: 0,
        }
    }

    // ============ Navigation ============

    pub fn show_page(&mut self, page: Page) -> PageTransition {
        self.pages.show(page)
    }

    /// Complete a delayed activation; false if a newer navigation happened
    pub fn activate(&mut self, transition: PageTransition) -> bool {
        self.pages.activate(transition)
    }

    /// Leave the player: stop every layer, drop the session, show selection
    pub fn go_back(&mut self) -> PageTransition {
        self.view.reset();
        self.session_epoch += 1;
        self.pages.show(Page::Selection)
    }

    // ============ Session acquisition ============

    /// Start a request for `theme`. Blank themes are ignored.
    pub fn request_session(&mut self, theme: &str) -> Option<SessionTicket> {
        let theme = theme.trim();
        if theme.is_empty() {
            return None;
        }
        self.request_generation += 1;
        self.loading = true;
        info!(
            "Requesting session for theme {:?} (request #{})",
            theme, self.request_generation
        );
        Some(SessionTicket {
            generation: self.request_generation,
            theme: theme.to_string(),
        })
    }

    /// Apply the result of a session request
    pub fn complete_request(
        &mut self,
        ticket: &SessionTicket,
        result: Result<Session, SessionFetchError>,
        policy: FailurePolicy,
    ) -> RequestOutcome {
        if ticket.generation != self.request_generation {
            debug!(
                "Dropping stale session response for {:?} (request #{}, latest #{})",
                ticket.theme, ticket.generation, self.request_generation
            );
            return RequestOutcome::Stale;
        }
        self.loading = false;

        let (session, source) = match result {
            Ok(session) => (session, SessionSource::Remote),
            Err(e) if e.is_recoverable() => match policy {
                FailurePolicy::SilentFallback => {
                    warn!("{}; using fallback session for {:?}", e, ticket.theme);
                    (Session::fallback(&ticket.theme), SessionSource::Fallback)
                }
                FailurePolicy::AlertAndAbort => {
                    warn!("{}; not proceeding to the player", e);
                    return RequestOutcome::Aborted(e);
                }
            },
            Err(e) => {
                error!("{} (theme {:?})", e, ticket.theme);
                return RequestOutcome::Rejected(e);
            }
        };

        info!(
            "Presenting {:?} session {:?} with {} layers",
            source,
            session.title,
            session.layers.len()
        );
        let loads = self.setup_player(session);
        let transition = self.show_page(Page::Player);
        RequestOutcome::Presented {
            source,
            transition,
            loads,
        }
    }

    // ============ Player population ============

    /// Replace the current session and rebuild one output per layer.
    ///
    /// Returns the downloads the caller has to run for the new outputs.
    pub fn setup_player(&mut self, session: Session) -> Vec<LayerLoad> {
        self.view.reset();
        self.session_epoch += 1;

        let mut loads = Vec::with_capacity(session.layers.len());
        for (index, layer) in session.layers.iter().enumerate() {
            let output = self.backend.open_layer(layer);
            self.view.layers.push(LayerControl::new(
                layer.name.clone(),
                layer.initial_volume,
                output,
            ));
            loads.push(LayerLoad {
                epoch: self.session_epoch,
                index,
                url: layer.url.clone(),
            });
        }

        let backdrop = session.backdrop();
        debug!(
            "Backdrop: {}",
            backdrop.to_css(&session.colors.primary, &session.colors.secondary)
        );
        self.view.backdrop = Some(backdrop);
        self.view.session = Some(session);
        self.view.is_playing = false;
        loads
    }

    /// Hand a finished download to its layer. False if the session moved on.
    pub fn attach_layer_audio(
        &mut self,
        load: &LayerLoad,
        result: Result<Arc<[u8]>, String>,
    ) -> bool {
        if load.epoch != self.session_epoch {
            debug!("Dropping audio for a previous session: {}", load.url);
            return false;
        }
        let Some(layer) = self.view.layers.get_mut(load.index) else {
            return false;
        };

        match result {
            Ok(data) => {
                if let Err(e) = layer.output_mut().attach(data) {
                    warn!("Layer {:?} unavailable: {:#}", layer.name, e);
                }
            }
            Err(e) => {
                warn!("Failed to load layer {:?}: {}", layer.name, e);
                layer.output_mut().mark_failed(e);
            }
        }
        true
    }

    // ============ Mixing & transport ============

    /// Move one layer's slider. Other layers are untouched.
    pub fn set_layer_volume(&mut self, index: usize, volume: f32) -> bool {
        if !volume.is_finite() {
            return false;
        }
        match self.view.layers.get_mut(index) {
            Some(layer) => {
                layer.set_volume(volume);
                true
            }
            None => false,
        }
    }

    /// Pause everything if playing, otherwise try to start everything.
    ///
    /// The playing flag flips regardless of how many layers actually started.
    pub fn toggle_play(&mut self) -> Transport {
        let transport = if self.view.is_playing {
            self.view.pause_all();
            Transport::Paused
        } else {
            let report = self.view.play_all();
            for blocked in &report.blocked {
                warn!("Layer {:?} blocked: {}", blocked.name, blocked.reason);
            }
            Transport::Started(report)
        };
        self.view.is_playing = !self.view.is_playing;
        transport
    }

    /// Pause every layer and rewind it. Safe with no layers.
    pub fn stop_all(&mut self) {
        self.view.stop_all();
    }

    // ============ Queries ============

    pub fn pages(&self) -> &PageView {
        &self.pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_playing(&self) -> bool {
        self.view.is_playing
    }

    pub fn session(&self) -> Option<&Session> {
        self.view.session.as_ref()
    }

    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.view.backdrop.as_ref()
    }

    pub fn layers(&self) -> &[LayerControl] {
        &self.view.layers
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn is_audible(&self) -> bool {
        self.backend.is_audible()
    }

    /// Label for the global play/pause button
    pub fn transport_label(&self) -> Key {
        if self.view.is_playing {
            Key::PauseAll
        } else {
            Key::PlayAll
        }
    }
}
