// src/app/state.rs
//! Application state definitions

use std::path::PathBuf;

use crate::api::SessionClient;
use crate::features::{SessionPlayer, Settings};
use crate::i18n::{Key, Locale};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, session client, audio)
    pub core: CoreState,
    /// UI state (text input, dialogs)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// `None` when the configured server URL is unusable
    pub client: Option<SessionClient>,
    /// Used for layer downloads; shared with `client` when it exists
    pub http: reqwest::Client,
    pub player: SessionPlayer,
    pub cache_dir: PathBuf,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings, locale: Locale, cache_dir: PathBuf) -> (Self, Option<String>) {
        let base_url = settings.server.effective_base_url();
        let (client, config_error) = match SessionClient::new(&base_url, settings.server.timeout())
        {
            Ok(client) => {
                tracing::info!("Session endpoint: {}", client.endpoint());
                (Some(client), None)
            }
            Err(e) => {
                tracing::error!("Session client unavailable: {:#}", e);
                (None, Some(format!("{:#}", e)))
            }
        };
        let http = client
            .as_ref()
            .map(|c| c.http())
            .unwrap_or_default();

        let backend = crate::audio::create_backend(settings.audio.output_device.as_deref());
        let player = SessionPlayer::new(backend);
        tracing::info!("Audio backend: {}", player.backend_name());

        let core = Self {
            settings,
            locale,
            client,
            http,
            player,
            cache_dir,
        };
        (core, config_error)
    }
}

/// A modal message shown over the current page
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: Key,
    pub message: Key,
    /// Technical detail shown under the message
    pub detail: Option<String>,
}

/// UI State
#[derive(Debug, Default)]
pub struct UiState {
    /// Free-text theme being typed on the selection page
    pub custom_theme: String,
    pub dialog: Option<Dialog>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
